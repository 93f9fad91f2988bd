use super::{FastMatchKind, Resolution, Resolve};
use crate::{
    error::LoadError,
    normalize::{RawRecord, normalize},
    source::{CATEGORY_DEFAULTS, Category, FastSource, load_fast_source},
};
use std::{collections::HashMap, path::Path};

#[derive(Debug, Clone, Default)]
/// Resolver over the single file fast source, with built in cabinet defaults as a last resort
///
/// Raw entries are kept as loaded and normalized per query
pub struct FastResolver {
    entries: FastSource,
    categories: HashMap<String, Category>,
}

impl FastResolver {
    pub fn load(fast_source: impl AsRef<Path>) -> Result<Self, LoadError> {
        Ok(Self::from_sources(
            load_fast_source(fast_source)?,
            CATEGORY_DEFAULTS.clone(),
        ))
    }

    pub fn from_sources(entries: FastSource, categories: HashMap<String, Category>) -> Self {
        Self {
            entries,
            categories,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top level romnames, in source order
    pub fn romnames(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Resolve for FastResolver {
    type Kind = FastMatchKind;

    const UNMATCHED: FastMatchKind = FastMatchKind::Unmatched;

    #[tracing::instrument(skip(self))]
    fn resolve(&self, romname: &str) -> Resolution<FastMatchKind> {
        let romname = romname.trim().to_lowercase();

        let Some(entry) = self.entries.get(&romname) else {
            return Resolution::Unmatched;
        };

        if entry.payload.has_controls() {
            return Resolution::Matched {
                descriptor: normalize(
                    &romname,
                    RawRecord::Fast {
                        payload: &entry.payload,
                        parent: None,
                    },
                ),
                kind: FastMatchKind::Direct,
            };
        }

        // First clone in file order, not the best one
        if let Some((clone, payload)) = entry
            .clones
            .iter()
            .find(|(_, payload)| payload.has_controls())
        {
            tracing::debug!("Using controls of clone {}", clone);

            return Resolution::Matched {
                descriptor: normalize(
                    &romname,
                    RawRecord::Fast {
                        payload,
                        parent: Some(&entry.payload),
                    },
                ),
                kind: FastMatchKind::CloneEntry,
            };
        }

        if let Some(category) = self.categories.get(&romname) {
            tracing::debug!("Falling back to the {} cabinet default", category);

            return Resolution::Matched {
                descriptor: normalize(&romname, RawRecord::Category(*category)),
                kind: FastMatchKind::CategoryDefault,
            };
        }

        Resolution::Unmatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolver() -> FastResolver {
        let entries: FastSource = serde_json::from_str(
            r#"{
                "sf2": {
                    "description": "Street Fighter II",
                    "playercount": 2,
                    "controls": [ { "name": "P1_BUTTON1", "desc": "Jab Punch" } ]
                },
                "kof97": {
                    "description": "The King of Fighters '97",
                    "playercount": 2,
                    "clones": {
                        "kof97pls": { "description": "The King of Fighters '97 Plus" },
                        "kof97h": {
                            "controls": [ { "name": "P1_BUTTON1", "desc": "Light Punch" } ]
                        },
                        "kof97a": {
                            "controls": [ { "name": "P1_BUTTON1", "desc": "Something Else" } ]
                        }
                    }
                },
                "outrun": { "description": "Out Run" },
                "bare": { "description": "Nothing here", "controls": [] }
            }"#,
        )
        .unwrap();

        FastResolver::from_sources(entries, CATEGORY_DEFAULTS.clone())
    }

    #[test]
    fn direct_payload() {
        let resolution = resolver().resolve("sf2");

        assert_eq!(resolution.kind(), Some(FastMatchKind::Direct));
        let descriptor = resolution.descriptor().unwrap();
        assert_eq!(descriptor.display_name, "Street Fighter II");
        assert_eq!(descriptor.num_players, 2);
    }

    #[test]
    fn first_clone_with_controls() {
        let resolution = resolver().resolve("kof97");

        assert_eq!(resolution.kind(), Some(FastMatchKind::CloneEntry));
        let descriptor = resolution.descriptor().unwrap();
        assert_eq!(descriptor.romname, "kof97");
        assert_eq!(descriptor.display_name, "The King of Fighters '97");
        assert_eq!(descriptor.label_for("P1_BUTTON1").unwrap().action, "Light Punch");
    }

    #[test]
    fn category_default_when_entry_has_no_controls() {
        let resolution = resolver().resolve("outrun");

        assert_eq!(resolution.kind(), Some(FastMatchKind::CategoryDefault));
        assert_eq!(
            resolution.descriptor().unwrap().label_for("P1_BUTTON1").unwrap().action,
            "Accelerate"
        );

        // Defaults only back up entries the source knows about
        assert_eq!(resolver().resolve("centiped"), Resolution::Unmatched);
    }

    #[test]
    fn misses() {
        let resolver = resolver();

        assert_eq!(resolver.resolve("bare"), Resolution::Unmatched);
        assert_eq!(resolver.resolve("kof97h"), Resolution::Unmatched);
        assert_eq!(resolver.resolve("pacman"), Resolution::Unmatched);
    }

    #[test]
    fn custom_category_table() {
        let resolver = FastResolver::from_sources(
            serde_json::from_value(json!({
                "mycab": { "description": "My Cabinet" },
                "outrun": { "description": "Out Run" }
            }))
            .unwrap(),
            HashMap::from([("mycab".to_string(), Category::LightGun)]),
        );

        assert_eq!(
            resolver.resolve("mycab").kind(),
            Some(FastMatchKind::CategoryDefault)
        );
        assert_eq!(resolver.resolve("outrun"), Resolution::Unmatched);
    }

    #[test]
    fn coverage() {
        let report = resolver().coverage(["sf2", "kof97", "outrun", "pacman"]);

        assert_eq!(report.total, 4);
        assert_eq!(report.count(FastMatchKind::Direct), 1);
        assert_eq!(report.count(FastMatchKind::CloneEntry), 1);
        assert_eq!(report.count(FastMatchKind::CategoryDefault), 1);
        assert_eq!(report.count(FastMatchKind::Unmatched), 1);
    }
}
