//! Applies command-line overrides on top of file and environment settings.
//!
//! Precedence, lowest first: config files, `RH_*` variables, global flags
//! (`--verbose`/`--quiet`), then subcommand flags.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Settings};

pub struct ConfigurationMerger {
    loader: ConfigLoader,
}

impl ConfigurationMerger {
    /// Builds the loader from the environment, then narrows it with `--config`
    /// and `--env`.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = match &cli.config {
            Some(path) => ConfigLoader::default().with_file(path),
            None => ConfigLoader::new()?,
        };
        if let Some(environment) = cli.env {
            loader = loader.with_environment(environment);
        }
        Ok(Self { loader })
    }

    pub fn with_loader(loader: ConfigLoader) -> Self {
        Self { loader }
    }

    /// Reads the configured sources, applies the CLI overrides and validates
    /// the result.
    pub fn merge(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut settings = self.loader.read()?;
        apply_overrides(&mut settings, cli);
        settings.validate()?;
        Ok(settings)
    }
}

fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }

    if let Commands::Serve(args) = cli.command() {
        if let Some(host) = args.host {
            settings.server.host = host;
        }
        if let Some(port) = args.port {
            settings.server.port = port;
        }
        if let Some(level) = args.log_level {
            settings.logger.level = level.as_str().to_string();
        }
    }
}
