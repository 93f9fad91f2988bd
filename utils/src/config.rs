use crate::CommandError;
use clap::Subcommand;
use ctrlmap_config::Environment;
use std::{
    fs::{File, create_dir_all},
    path::Path,
};

#[derive(Clone, Debug, Subcommand)]
pub enum ConfigAction {
    /// Writes the current settings, defaults included, to the config file
    Init {
        /// Replace a config file that already exists
        #[clap(short, long)]
        force: bool,
    },
    /// Prints the settings in effect
    Show,
}

pub fn run(
    action: ConfigAction,
    location: &Path,
    environment: &Environment,
) -> Result<(), CommandError> {
    match action {
        ConfigAction::Init { force } => config_init(location, environment, force),
        ConfigAction::Show => {
            environment.save(std::io::stdout().lock())?;
            println!();
            Ok(())
        }
    }
}

fn config_init(
    location: &Path,
    environment: &Environment,
    force: bool,
) -> Result<(), CommandError> {
    if location.exists() && !force {
        return Err(format!(
            "\"{}\" already exists, pass --force to overwrite it",
            location.display()
        )
        .into());
    }

    if let Some(parent) = location.parent() {
        create_dir_all(parent)?;
    }

    environment.save(File::create(location)?)?;
    tracing::info!("Wrote config to \"{}\"", location.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    #[test]
    fn init_writes_loadable_config() {
        let directory = tempfile::tempdir().unwrap();
        let location = directory.path().join("nested").join("config.ron");
        let environment = Environment {
            output_extension: "ini".to_string(),
            ..Default::default()
        };

        config_init(&location, &environment, false).unwrap();

        let loaded = Environment::load(BufReader::new(File::open(&location).unwrap())).unwrap();
        assert_eq!(loaded, environment);
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let directory = tempfile::tempdir().unwrap();
        let location = directory.path().join("config.ron");

        config_init(&location, &Environment::default(), false).unwrap();
        assert!(config_init(&location, &Environment::default(), false).is_err());
        assert!(config_init(&location, &Environment::default(), true).is_ok());
    }
}
