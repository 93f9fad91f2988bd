use std::path::PathBuf;
use thiserror::Error;

#[allow(missing_docs)]
#[derive(Debug, Error)]
/// A control data source could not be turned into a resolver
pub enum LoadError {
    #[error("Could not read \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse \"{}\": {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
/// A config file could not be produced for a ROM
pub enum GenerateError {
    #[error("Could not read template \"{}\": {source}", path.display())]
    Template {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not write \"{}\": {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
