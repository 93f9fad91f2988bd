use crate::CommandError;
use ctrlmap_config::Environment;
use ctrlmap_controls::{Resolve, generate::generate_all, template::Template};
use itertools::Itertools;

pub fn controls_generate<R: Resolve>(
    resolver: &R,
    romnames: &[String],
    environment: &Environment,
) -> Result<(), CommandError> {
    let template = Template::load(&environment.template.0)?;

    let report = generate_all(
        resolver,
        romnames,
        &template,
        &environment.output_directory.0,
        &environment.output_extension,
    );

    if !report.skipped.is_empty() {
        tracing::warn!("No controls known for {}", report.skipped.iter().join(", "));
    }

    tracing::info!(
        "{} into \"{}\"",
        report,
        environment.output_directory.0.display()
    );

    if report.is_complete() {
        Ok(())
    } else {
        Err(format!(
            "Could not write configs for {}",
            report.failed.iter().map(|(romname, _)| romname).join(", ")
        )
        .into())
    }
}
