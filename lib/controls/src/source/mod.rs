//! Raw schemas of the control data sources, exactly as they sit on disk

use crate::error::LoadError;
use indexmap::IndexMap;
use lenient::Lenient;
use serde::de::DeserializeOwned;
use std::{fs::File, io::BufReader, path::Path};

mod category;
mod fast;
mod lenient;
mod primary;
mod relationship;

pub use category::*;
pub use fast::*;
pub use primary::*;
pub use relationship::*;

/// Read a JSON object of romname -> record
///
/// A document that is not JSON, or not an object, is fatal for the resolver being built. Inside
/// it, entries that are not objects are dropped and the rest are kept in file order
fn load_records<T: DeserializeOwned>(path: &Path) -> Result<IndexMap<String, T>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: IndexMap<String, Lenient<T>> = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let total = entries.len();
    let records: IndexMap<_, _> = entries
        .into_iter()
        .filter_map(|(romname, Lenient(record))| Some((romname, record?)))
        .collect();

    if records.len() != total {
        tracing::warn!(
            "Skipped {} malformed entries in \"{}\"",
            total - records.len(),
            path.display()
        );
    }

    Ok(records)
}
