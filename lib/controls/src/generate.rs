//! Config generation over many ROMs at once

use crate::{
    error::GenerateError,
    resolve::{Resolution, Resolve},
    template::{Template, write_config},
};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::{collections::BTreeSet, fmt::Display, path::Path};

#[derive(Debug, Default)]
/// What happened to every ROM of a bulk generation run
pub struct GenerationReport {
    /// ROMs a config was written for
    pub generated: Vec<String>,
    /// ROMs no source knows about
    pub skipped: Vec<String>,
    /// ROMs that resolved but could not be written
    pub failed: Vec<(String, GenerateError)>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Display for GenerationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} generated, {} skipped, {} failed",
            self.generated.len(),
            self.skipped.len(),
            self.failed.len()
        )
    }
}

enum Outcome {
    Generated(String),
    Skipped(String),
    Failed(String, GenerateError),
}

/// Resolve and write a config for every romname
///
/// One ROM failing never stops the others, the report lists every outcome sorted by romname.
/// Romnames are lowercased and each one is handled once, so no two workers write the same file
pub fn generate_all<R: Resolve>(
    resolver: &R,
    romnames: &[String],
    template: &Template,
    output_directory: &Path,
    extension: &str,
) -> GenerationReport {
    let romnames: Vec<String> = romnames
        .iter()
        .map(|romname| romname.trim().to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let outcomes: Vec<_> = romnames
        .par_iter()
        .map(|romname| match resolver.resolve(romname) {
            Resolution::Matched { descriptor, kind } => {
                match write_config(&descriptor, template, output_directory, extension) {
                    Ok(_) => {
                        tracing::debug!("Generated config for {} ({})", romname, kind);
                        Outcome::Generated(romname.clone())
                    }
                    Err(err) => {
                        tracing::error!("Failed to generate config for {}: {}", romname, err);
                        Outcome::Failed(romname.clone(), err)
                    }
                }
            }
            Resolution::Unmatched => Outcome::Skipped(romname.clone()),
        })
        .collect();

    let mut report = GenerationReport::default();

    for outcome in outcomes {
        match outcome {
            Outcome::Generated(romname) => report.generated.push(romname),
            Outcome::Skipped(romname) => report.skipped.push(romname),
            Outcome::Failed(romname, err) => report.failed.push((romname, err)),
        }
    }

    report.generated.sort();
    report.skipped.sort();
    report.failed.sort_by(|(a, _), (b, _)| a.cmp(b));

    tracing::info!("Bulk generation finished: {}", report);

    report
}
