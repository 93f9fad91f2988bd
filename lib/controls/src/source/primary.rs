use super::lenient::{lenient, lenient_list};
use crate::error::LoadError;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One entry of the primary control data source
///
/// Numeric and boolean fields are kept loosely typed, the source is hand maintained and not
/// every contributor agreed on `2` versus `"2"`. Null or mistyped fields read as absent
pub struct PrimaryRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub romname: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub gamename: Option<String>,
    #[serde(default)]
    pub num_players: Option<Value>,
    #[serde(default)]
    pub alternating: Option<Value>,
    #[serde(default)]
    pub mirrored: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub misc_details: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub players: Vec<PrimaryPlayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrimaryPlayer {
    #[serde(default)]
    pub number: Option<Value>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub labels: Vec<PrimaryLabel>,
}

#[derive(Debug, Clone, Deserialize)]
/// `name` is the control code, `value` what it does, a label without a usable code is dropped
pub struct PrimaryLabel {
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub value: String,
}

/// Primary source keyed by romname, in file order
pub type PrimarySource = IndexMap<String, PrimaryRecord>;

/// Load the primary source, keys are lowercased on the way in
pub fn load_primary_source(path: impl AsRef<Path>) -> Result<PrimarySource, LoadError> {
    let path = path.as_ref();
    let source: PrimarySource = super::load_records(path)?;

    tracing::info!(
        "Loaded {} primary control records from \"{}\"",
        source.len(),
        path.display()
    );

    Ok(source
        .into_iter()
        .map(|(romname, record)| (romname.to_lowercase(), record))
        .collect())
}
