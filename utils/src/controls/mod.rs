use crate::CommandError;
use clap::Subcommand;
use ctrlmap_config::{Environment, ResolverMode};
use ctrlmap_controls::{ExhaustiveResolver, FastResolver, Resolve, list_romnames};
use std::path::{Path, PathBuf};

pub mod bindings;
pub mod generate;
pub mod resolve;

#[derive(Clone, Debug, Subcommand)]
pub enum ControlsAction {
    /// Prints the resolved control layout of ROMs
    Resolve {
        #[clap(required=true, num_args=1..)]
        romnames: Vec<String>,
    },
    /// Writes a config for each ROM from the template
    Generate {
        #[clap(required=true, num_args=1..)]
        romnames: Vec<String>,
    },
    /// Writes configs for every ROM in a directory, or the ROMs given
    GenerateAll {
        /// Directory to take romnames from, the configured ROM directory when absent
        #[clap(short, long)]
        roms: Option<PathBuf>,
        romnames: Vec<String>,
    },
    /// Reports how each ROM in a directory gets its controls
    Coverage {
        #[clap(short, long)]
        roms: Option<PathBuf>,
    },
    /// Compares the controls of a ROM against its custom bindings
    Bindings { romname: String },
}

pub fn run(action: ControlsAction, environment: &Environment) -> Result<(), CommandError> {
    match environment.mode {
        ResolverMode::Exhaustive => {
            let resolver = ExhaustiveResolver::load(
                &environment.primary_source.0,
                Some(environment.relationship_database.0.as_path()),
            )?;

            run_with(&resolver, action, environment)
        }
        ResolverMode::Fast => {
            let resolver = FastResolver::load(&environment.fast_source.0)?;

            run_with(&resolver, action, environment)
        }
    }
}

fn run_with<R: Resolve>(
    resolver: &R,
    action: ControlsAction,
    environment: &Environment,
) -> Result<(), CommandError> {
    match action {
        ControlsAction::Resolve { romnames } => {
            resolve::controls_resolve(resolver, &romnames);
            Ok(())
        }
        ControlsAction::Generate { romnames } => {
            generate::controls_generate(resolver, &romnames, environment)
        }
        ControlsAction::GenerateAll { roms, romnames } => {
            let romnames = if romnames.is_empty() {
                romnames_in(roms.as_deref(), environment)?
            } else {
                romnames
            };

            generate::controls_generate(resolver, &romnames, environment)
        }
        ControlsAction::Coverage { roms } => {
            let romnames = romnames_in(roms.as_deref(), environment)?;
            resolve::controls_coverage(resolver, &romnames);
            Ok(())
        }
        ControlsAction::Bindings { romname } => {
            bindings::controls_bindings(resolver, &romname, environment)
        }
    }
}

fn romnames_in(
    directory: Option<&Path>,
    environment: &Environment,
) -> Result<Vec<String>, CommandError> {
    let directory = directory.unwrap_or(&environment.rom_directory.0);

    let romnames = list_romnames(directory)
        .map_err(|err| format!("Could not list \"{}\": {}", directory.display(), err))?;

    tracing::info!(
        "Found {} ROMs in \"{}\"",
        romnames.len(),
        directory.display()
    );

    Ok(romnames)
}
