use crate::{config::ConfigAction, controls::ControlsAction};
use clap::{Parser, Subcommand};
use ctrlmap_config::{ENVIRONMENT_LOCATION, Environment, ResolverMode};
use ctrlmap_input::Convention;
use std::{
    fs::File,
    io::BufReader,
    ops::Deref,
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod config;
mod controls;
mod translate;

pub type CommandError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone, Parser)]
#[clap(name = "ctrlmap", version, about)]
pub struct Cli {
    /// Config file to use instead of the one in the data directory
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,
    /// Resolve against the fast source regardless of the configured mode
    #[clap(long, global = true)]
    fast: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    #[clap(flatten)]
    Controls(ControlsAction),
    /// Translates controller tokens or input sequences between naming conventions
    Translate {
        #[clap(required=true, num_args=1..)]
        tokens: Vec<String>,
        /// Convention to translate into, the configured one when absent
        #[clap(short, long)]
        to: Option<Convention>,
    },
    #[clap(subcommand)]
    Config(ConfigAction),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = Cli::parse();

    let config_location = args
        .config
        .clone()
        .unwrap_or_else(|| ENVIRONMENT_LOCATION.deref().clone());

    let mut environment = match load_environment(&config_location) {
        Ok(environment) => environment,
        Err(err) => {
            tracing::error!(
                "Could not read config \"{}\": {}",
                config_location.display(),
                err
            );
            return ExitCode::FAILURE;
        }
    };

    if args.fast {
        environment.mode = ResolverMode::Fast;
    }

    let result = match args.command {
        Command::Controls(action) => controls::run(action, &environment),
        Command::Translate { tokens, to } => {
            translate::translate(&tokens, to.unwrap_or(environment.convention));
            Ok(())
        }
        Command::Config(action) => config::run(action, &config_location, &environment),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Settings at `location`, defaults when nothing has been written there yet
fn load_environment(location: &Path) -> Result<Environment, CommandError> {
    if !location.exists() {
        tracing::debug!(
            "No config at \"{}\", using defaults",
            location.display()
        );
        return Ok(Environment::default());
    }

    Ok(Environment::load(BufReader::new(File::open(location)?))?)
}
