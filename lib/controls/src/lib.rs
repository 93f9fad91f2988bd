//! Resolution of arcade ROM control layouts and rendering them into per ROM config files
//!
//! Sources are loaded once into an immutable resolver, see [resolve::ExhaustiveResolver] and
//! [resolve::FastResolver], which then answer queries with owned [ControlDescriptor]s that a
//! [template::Template] renders

pub mod bindings;
pub mod descriptor;
pub mod error;
pub mod generate;
pub mod normalize;
pub mod resolve;
pub mod source;
pub mod template;

pub use descriptor::{ControlDescriptor, ControlLabel, PlayerControls};
pub use error::{GenerateError, LoadError};
pub use resolve::{
    ExhaustiveResolver, FastMatchKind, FastResolver, MatchKind, Resolution, Resolve,
};

use std::{fs, path::Path};

/// ROM identifier for a file, its lowercased file stem
pub fn romname_from_path(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .filter(|romname| !romname.is_empty())
}

/// Romnames of the regular files in a ROM directory, sorted and deduplicated
pub fn list_romnames(directory: impl AsRef<Path>) -> Result<Vec<String>, std::io::Error> {
    let mut romnames = Vec::new();

    for entry in fs::read_dir(directory)? {
        let path = entry?.path();

        if path.is_file()
            && let Some(romname) = romname_from_path(&path)
        {
            romnames.push(romname);
        }
    }

    romnames.sort();
    romnames.dedup();

    Ok(romnames)
}
