use super::lenient::{lenient, lenient_list, lenient_map};
use crate::error::LoadError;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
/// Control data carried by a fast source entry or one of its clones
pub struct FastPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default)]
    pub playercount: Option<Value>,
    #[serde(default)]
    pub alternating: Option<Value>,
    #[serde(default)]
    pub mirrored: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub misc: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub controls: Vec<FastControl>,
}

impl FastPayload {
    /// Whether this payload has any controls of its own, an empty list counts as none
    pub fn has_controls(&self) -> bool {
        !self.controls.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
/// Flat control entry, the player is encoded in the `P<n>_` prefix of `name`
pub struct FastControl {
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub desc: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FastEntry {
    #[serde(flatten)]
    pub payload: FastPayload,
    /// Clone sub entries, kept in file order since the first one with controls wins
    #[serde(default, deserialize_with = "lenient_map")]
    pub clones: IndexMap<String, FastPayload>,
}

pub type FastSource = IndexMap<String, FastEntry>;

/// Load the fast source, keys (including clone keys) are lowercased on the way in
pub fn load_fast_source(path: impl AsRef<Path>) -> Result<FastSource, LoadError> {
    let path = path.as_ref();
    let source: FastSource = super::load_records(path)?;

    tracing::info!(
        "Loaded {} fast source entries from \"{}\"",
        source.len(),
        path.display()
    );

    Ok(source
        .into_iter()
        .map(|(romname, mut entry)| {
            entry.clones = std::mem::take(&mut entry.clones)
                .into_iter()
                .map(|(clone, payload)| (clone.to_lowercase(), payload))
                .collect();

            (romname.to_lowercase(), entry)
        })
        .collect())
}
