use crate::descriptor::ControlDescriptor;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt::Display};
use strum::{Display, EnumIter};

mod exhaustive;
mod fast;

pub use exhaustive::ExhaustiveResolver;
pub use fast::FastResolver;

/// Characters a region variant may carry as its last character
pub const REGION_CODES: [char; 5] = ['j', 'u', 'b', 'e', 'w'];

/// Appended to the display name of a region variant hit
pub const VARIANT_SUFFIX: &str = " (Variant)";
/// Appended to the display name of a clone-of-parent hit
pub const CLONE_SUFFIX: &str = " (Clone)";
/// Appended to the display name of a hardware platform hit
pub const DERIVED_SUFFIX: &str = " (Derived)";

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    Display,
)]
/// Which tier of the exhaustive resolver produced a result
pub enum MatchKind {
    Direct,
    RegionVariant,
    CloneParent,
    HardwarePlatform,
    Unmatched,
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    Display,
)]
/// Which tier of the fast resolver produced a result
pub enum FastMatchKind {
    Direct,
    CloneEntry,
    CategoryDefault,
    Unmatched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of a lookup, not finding a ROM is an ordinary answer
pub enum Resolution<K> {
    Matched {
        /// Caller owned copy, never shared with the resolver
        descriptor: ControlDescriptor,
        kind: K,
    },
    Unmatched,
}

impl<K: Copy> Resolution<K> {
    pub fn descriptor(&self) -> Option<&ControlDescriptor> {
        match self {
            Resolution::Matched { descriptor, .. } => Some(descriptor),
            Resolution::Unmatched => None,
        }
    }

    pub fn into_descriptor(self) -> Option<ControlDescriptor> {
        match self {
            Resolution::Matched { descriptor, .. } => Some(descriptor),
            Resolution::Unmatched => None,
        }
    }

    pub fn kind(&self) -> Option<K> {
        match self {
            Resolution::Matched { kind, .. } => Some(*kind),
            Resolution::Unmatched => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }
}

/// Answers "what are the controls of this ROM" against indices built once at load
///
/// Implementations never mutate themselves while resolving, so a shared reference can be
/// queried from as many threads as wanted
pub trait Resolve: Sync {
    /// Tier reported alongside a hit
    type Kind: Copy + Ord + Display + Send;

    /// Tier reported for a miss in coverage statistics
    const UNMATCHED: Self::Kind;

    fn resolve(&self, romname: &str) -> Resolution<Self::Kind>;

    /// Resolve every romname and count how each one was answered
    fn coverage<'a>(&self, romnames: impl IntoIterator<Item = &'a str>) -> CoverageReport<Self::Kind>
    where
        Self: Sized,
    {
        let mut report = CoverageReport::default();

        for romname in romnames {
            let kind = self.resolve(romname).kind().unwrap_or(Self::UNMATCHED);
            *report.counts.entry(kind).or_default() += 1;
            report.total += 1;
        }

        report
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// How many ROMs each resolution tier answered
pub struct CoverageReport<K> {
    pub counts: BTreeMap<K, usize>,
    pub total: usize,
}

impl<K> Default for CoverageReport<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<K: Ord> CoverageReport<K> {
    pub fn count(&self, kind: K) -> usize {
        self.counts.get(&kind).copied().unwrap_or_default()
    }
}

impl<K: Display> Display for CoverageReport<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (kind, count) in &self.counts {
            let percentage = if self.total == 0 {
                0.0
            } else {
                *count as f64 * 100.0 / self.total as f64
            };

            writeln!(f, "{:<18}{:>8} {:>6.2}%", kind.to_string(), count, percentage)?;
        }

        write!(f, "{:<18}{:>8}", "Total", self.total)
    }
}

/// Strip a single trailing region character, if there is one and something is left behind
pub fn region_base(romname: &str) -> Option<&str> {
    let last = romname.chars().next_back()?;

    if !REGION_CODES.contains(&last) {
        return None;
    }

    let base = &romname[..romname.len() - last.len_utf8()];
    (!base.is_empty()).then_some(base)
}

/// [region_base] or the name itself
pub fn strip_region(romname: &str) -> &str {
    region_base(romname).unwrap_or(romname)
}
