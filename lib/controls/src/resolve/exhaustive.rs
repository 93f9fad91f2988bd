use super::{
    CLONE_SUFFIX, DERIVED_SUFFIX, MatchKind, Resolution, Resolve, VARIANT_SUFFIX, region_base,
    strip_region,
};
use crate::{
    descriptor::ControlDescriptor,
    error::LoadError,
    normalize::{RawRecord, normalize},
    source::{PrimarySource, RelationshipTable, load_primary_source},
};
use indexmap::IndexMap;
use std::{collections::HashMap, path::Path};

#[derive(Debug, Clone, Default)]
/// Resolver over the primary source, falling back through region variants, clone parents and
/// hardware platforms
pub struct ExhaustiveResolver {
    primary: IndexMap<String, ControlDescriptor>,
    /// Base name -> primary key, later records win on collision
    region_variants: HashMap<String, String>,
    relationships: RelationshipTable,
}

impl ExhaustiveResolver {
    /// Load both sources from disk
    ///
    /// A broken primary source is fatal, a broken or absent relationship database only turns
    /// off the clone and hardware tiers
    pub fn load(
        primary_source: impl AsRef<Path>,
        relationship_database: Option<&Path>,
    ) -> Result<Self, LoadError> {
        let primary = load_primary_source(primary_source)?;
        let relationships = relationship_database
            .map(|path| RelationshipTable::load(path))
            .unwrap_or_default();

        Ok(Self::from_sources(primary, relationships))
    }

    /// Build the indices from already loaded sources
    pub fn from_sources(primary: PrimarySource, relationships: RelationshipTable) -> Self {
        let primary: IndexMap<_, _> = primary
            .iter()
            .map(|(romname, record)| {
                (
                    romname.clone(),
                    normalize(romname, RawRecord::Primary(record)),
                )
            })
            .collect();

        let mut region_variants = HashMap::with_capacity(primary.len());
        for romname in primary.keys() {
            region_variants.insert(strip_region(romname).to_string(), romname.clone());
        }

        tracing::debug!(
            "Built exhaustive index of {} records with {} region bases",
            primary.len(),
            region_variants.len()
        );

        Self {
            primary,
            region_variants,
            relationships,
        }
    }

    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Romnames with a direct record, in source order
    pub fn romnames(&self) -> impl Iterator<Item = &str> {
        self.primary.keys().map(String::as_str)
    }

    fn borrow(&self, key: &str, romname: &str, suffix: &str) -> Option<ControlDescriptor> {
        self.primary
            .get(key)
            .map(|descriptor| descriptor.clone().borrowed_by(romname, suffix))
    }
}

impl Resolve for ExhaustiveResolver {
    type Kind = MatchKind;

    const UNMATCHED: MatchKind = MatchKind::Unmatched;

    #[tracing::instrument(skip(self))]
    fn resolve(&self, romname: &str) -> Resolution<MatchKind> {
        let romname = romname.trim().to_lowercase();

        if let Some(descriptor) = self.primary.get(&romname) {
            return Resolution::Matched {
                descriptor: descriptor.clone(),
                kind: MatchKind::Direct,
            };
        }

        if let Some(base) = region_base(&romname)
            && let Some(key) = self.region_variants.get(base)
            && let Some(descriptor) = self.borrow(key, &romname, VARIANT_SUFFIX)
        {
            tracing::debug!("Using {} as a region variant", key);

            return Resolution::Matched {
                descriptor,
                kind: MatchKind::RegionVariant,
            };
        }

        if let Some(relationship) = self.relationships.get(&romname) {
            if let Some(parent) = relationship.cloneof()
                && let Some(descriptor) = self.borrow(parent, &romname, CLONE_SUFFIX)
            {
                tracing::debug!("Using clone parent {}", parent);

                return Resolution::Matched {
                    descriptor,
                    kind: MatchKind::CloneParent,
                };
            }

            if let Some(platform) = relationship.romof()
                && platform != romname
                && let Some(descriptor) = self.borrow(platform, &romname, DERIVED_SUFFIX)
            {
                tracing::debug!("Using hardware platform {}", platform);

                return Resolution::Matched {
                    descriptor,
                    kind: MatchKind::HardwarePlatform,
                };
            }
        }

        Resolution::Unmatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Relationship;
    use serde_json::json;

    fn resolver() -> ExhaustiveResolver {
        let primary: PrimarySource = serde_json::from_value(json!({
            "sf2": {
                "gamename": "Street Fighter II",
                "numPlayers": 2,
                "players": [ { "number": 1, "labels": [ { "name": "P1_BUTTON1", "value": "Jab Punch" } ] } ]
            },
            "vsav": { "gamename": "Vampire Savior", "numPlayers": 2 },
            "neogeo": { "gamename": "Neo Geo MVS", "numPlayers": 2 },
            "dino": { "gamename": "Cadillacs and Dinosaurs", "numPlayers": 3 },
            "dinou": { "gamename": "Cadillacs and Dinosaurs (USA)", "numPlayers": 3 }
        }))
        .unwrap();

        let mut relationships = RelationshipTable::default();
        relationships.insert("vsava", Relationship::new(Some("vsav"), Some("vsav")));
        relationships.insert("aof2", Relationship::new(None, Some("neogeo")));
        relationships.insert("both", Relationship::new(Some("vsav"), Some("neogeo")));
        relationships.insert("orphan", Relationship::new(Some("missing"), Some("neogeo")));
        relationships.insert("selfish", Relationship::new(None, Some("selfish")));
        relationships.insert("empty", Relationship::new(Some(""), Some("")));

        ExhaustiveResolver::from_sources(primary, relationships)
    }

    fn display_name(resolution: &Resolution<MatchKind>) -> &str {
        &resolution.descriptor().unwrap().display_name
    }

    #[test]
    fn direct_hits_are_untouched() {
        let resolution = resolver().resolve("sf2");

        assert_eq!(resolution.kind(), Some(MatchKind::Direct));
        assert_eq!(resolution.descriptor().unwrap().romname, "sf2");
        assert_eq!(display_name(&resolution), "Street Fighter II");
    }

    #[test]
    fn region_variant() {
        let resolution = resolver().resolve("sf2j");

        assert_eq!(resolution.kind(), Some(MatchKind::RegionVariant));
        let descriptor = resolution.descriptor().unwrap();
        assert_eq!(descriptor.romname, "sf2j");
        assert_eq!(descriptor.display_name, "Street Fighter II (Variant)");
        assert_eq!(descriptor.label_for("P1_BUTTON1").unwrap().action, "Jab Punch");
    }

    #[test]
    fn region_variant_collisions_keep_the_last_record() {
        // Both dino and dinou share the base "dino", dinou comes later in the source
        let resolution = resolver().resolve("dinoj");

        assert_eq!(resolution.kind(), Some(MatchKind::RegionVariant));
        assert_eq!(
            display_name(&resolution),
            "Cadillacs and Dinosaurs (USA) (Variant)"
        );
    }

    #[test]
    fn clone_parent() {
        let resolution = resolver().resolve("vsava");

        assert_eq!(resolution.kind(), Some(MatchKind::CloneParent));
        assert_eq!(resolution.descriptor().unwrap().romname, "vsava");
        assert_eq!(display_name(&resolution), "Vampire Savior (Clone)");
    }

    #[test]
    fn hardware_platform() {
        let resolution = resolver().resolve("aof2");

        assert_eq!(resolution.kind(), Some(MatchKind::HardwarePlatform));
        assert_eq!(resolution.descriptor().unwrap().romname, "aof2");
        assert_eq!(display_name(&resolution), "Neo Geo MVS (Derived)");
    }

    #[test]
    fn clone_wins_over_platform() {
        let resolution = resolver().resolve("both");

        assert_eq!(resolution.kind(), Some(MatchKind::CloneParent));
        assert_eq!(display_name(&resolution), "Vampire Savior (Clone)");
    }

    #[test]
    fn missing_parent_falls_through_to_platform() {
        assert_eq!(
            resolver().resolve("orphan").kind(),
            Some(MatchKind::HardwarePlatform)
        );
    }

    #[test]
    fn misses() {
        let resolver = resolver();

        for romname in ["pacman", "selfish", "empty", "j", ""] {
            assert_eq!(resolver.resolve(romname), Resolution::Unmatched, "{romname}");
        }
    }

    #[test]
    fn queries_are_case_insensitive() {
        assert_eq!(resolver().resolve("SF2").kind(), Some(MatchKind::Direct));
    }

    #[test]
    fn results_are_independent_copies() {
        let resolver = resolver();

        let mut first = resolver.resolve("sf2").into_descriptor().unwrap();
        first.display_name.push_str(" edited");
        first.players.clear();

        let second = resolver.resolve("sf2").into_descriptor().unwrap();
        assert_eq!(second.display_name, "Street Fighter II");
        assert_eq!(second.players.len(), 1);
    }

    #[test]
    fn coverage_counts_each_tier() {
        let report = resolver().coverage(["sf2", "sf2j", "vsava", "aof2", "pacman"]);

        assert_eq!(report.total, 5);
        for kind in [
            MatchKind::Direct,
            MatchKind::RegionVariant,
            MatchKind::CloneParent,
            MatchKind::HardwarePlatform,
            MatchKind::Unmatched,
        ] {
            assert_eq!(report.count(kind), 1, "{kind}");
        }
    }

    #[test]
    fn load_without_relationships() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "sf2": {{ "gamename": "Street Fighter II" }} }}"#).unwrap();

        let resolver = ExhaustiveResolver::load(file.path(), None).unwrap();
        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.resolve("vsava"), Resolution::Unmatched);

        let resolver =
            ExhaustiveResolver::load(file.path(), Some(Path::new("/nonexistent/mame.xml")))
                .unwrap();
        assert_eq!(resolver.romnames().collect::<Vec<_>>(), ["sf2"]);
    }
}
