//! Dispatches a parsed command line to its handler.

use super::config_merger::ConfigurationMerger;
use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::{Environment, Settings};
use crate::logger::init_logger;

/// Resolves settings, installs the logger and runs the selected command.
pub async fn execute_command(cli: Cli) -> anyhow::Result<()> {
    let settings = ConfigurationMerger::from_cli(&cli)?.merge(&cli)?;
    let environment = cli.env.unwrap_or_else(Environment::from_env);

    init_logger(&settings.logger)?;
    tracing::debug!(command = ?cli.command(), %environment, "Configuration resolved");

    run(cli.command(), settings, environment).await
}

async fn run(command: Commands, settings: Settings, environment: Environment) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => {
            ServeCommandHandler::new(settings, environment)
                .execute(args.dry_run)
                .await
        }
        Commands::Migrate(args) => {
            MigrateCommandHandler::new(settings).execute(&args).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::ServeArgs;

    #[tokio::test]
    async fn test_serve_dry_run_does_not_start_server() {
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/rh".to_string();
        settings.jwt.secret = "k".repeat(48);

        let command = Commands::Serve(ServeArgs {
            dry_run: true,
            ..ServeArgs::default()
        });
        assert!(run(command, settings, Environment::Test).await.is_ok());
    }

    #[tokio::test]
    async fn test_migrate_reports_configuration_error() {
        let err = run(
            Commands::Migrate(Default::default()),
            Settings::default(),
            Environment::Test,
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("database.url"));
    }
}
