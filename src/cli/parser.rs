//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::validation::{
    parse_environment, validate_config_file_path, validate_host_address, validate_port,
    validate_rollback_steps,
};
use crate::config::Environment;

/// HR management REST API
#[derive(Parser, Debug)]
#[command(name = "rh-api")]
#[command(version = crate::clap_long_version())]
#[command(after_help = "\
EXAMPLES:
    rh-api                                   Start the server with config/default.toml
    rh-api serve --host 0.0.0.0 --port 8080  Bind to all interfaces on port 8080
    rh-api --config /etc/rh-api.toml serve   Use a single configuration file
    rh-api serve --dry-run                   Check configuration and exit
    rh-api migrate --rollback 1              Revert the last migration

Any setting can also be overridden with RH_<SECTION>__<KEY>, e.g. RH_DATABASE__URL.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Single configuration file, replacing the layered config/ directory
    #[arg(short, long, global = true, value_name = "FILE", value_parser = validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Environment whose config/{env}.toml layer is loaded [default: $RH_APP_ENV or development]
    #[arg(short, long, global = true, value_name = "ENV", value_parser = parse_environment)]
    pub env: Option<Environment>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve(ServeArgs),
    /// Apply, preview or revert database migrations
    Migrate(MigrateArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to bind, e.g. 127.0.0.1 or 0.0.0.0
    #[arg(long, value_name = "ADDRESS", value_parser = validate_host_address)]
    pub host: Option<String>,

    /// TCP port to listen on
    #[arg(short, long, value_parser = validate_port)]
    pub port: Option<u16>,

    /// Log level, taking precedence over --verbose and --quiet
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Validate the configuration and exit without serving
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrateArgs {
    /// List pending migrations without applying them
    #[arg(long, conflicts_with = "rollback")]
    pub dry_run: bool,

    /// Revert the given number of most recent migrations
    #[arg(long, value_name = "STEPS", value_parser = validate_rollback_steps)]
    pub rollback: Option<u32>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// The subcommand to run; no subcommand means `serve` with defaults.
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Serve(ServeArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn verify_cli() {
        <Cli as CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["rh-api", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["rh-api"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.command(), Commands::Serve(ServeArgs::default()));
    }

    #[test]
    fn test_serve_arguments() {
        let cli = Cli::try_parse_from([
            "rh-api",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "warning",
            "--dry-run",
        ])
        .unwrap();

        let Commands::Serve(args) = cli.command() else {
            panic!("expected serve");
        };
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.log_level, Some(LogLevel::Warn));
        assert!(args.dry_run);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rh-api", "migrate", "--env", "prod", "-v"]).unwrap();
        assert_eq!(cli.env, Some(Environment::Production));
        assert!(cli.verbose);
    }

    #[test]
    fn test_migrate_dry_run_conflicts_with_rollback() {
        let err = Cli::try_parse_from(["rh-api", "migrate", "--dry-run", "--rollback", "2"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let err = Cli::try_parse_from(["rh-api", "--verbose", "--quiet"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_invalid_port_and_environment() {
        assert!(Cli::try_parse_from(["rh-api", "serve", "--port", "0"]).is_err());
        assert!(Cli::try_parse_from(["rh-api", "--env", "qa"]).is_err());
    }
}
