//! `migrate`: apply, preview (`--dry-run`) or revert (`--rollback N`) the
//! embedded migrations.

use crate::cli::parser::MigrateArgs;
use crate::config::Settings;
use crate::db;
use crate::error::AppResult;

pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    pub async fn execute(&self, args: &MigrateArgs) -> AppResult<()> {
        self.config.database.validate()?;
        let url = &self.config.database.url;

        if args.dry_run {
            let pending = db::pending_migrations(url).await?;
            if pending.is_empty() {
                println!("✓ No pending migrations, database is up to date");
            } else {
                println!("Found {} pending migration(s):", pending.len());
                for name in &pending {
                    println!("  - {}", name);
                }
                println!("Run without --dry-run to apply them");
            }
            return Ok(());
        }

        if let Some(steps) = args.rollback {
            let reverted = db::revert_migrations(url, steps).await?;
            println!("✓ Rolled back {} migration(s):", reverted.len());
            for version in &reverted {
                println!("  - {}", version);
            }
            return Ok(());
        }

        let applied = db::run_pending_migrations(url).await?;
        if applied.is_empty() {
            println!("✓ No migrations to apply, database is up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            for version in &applied {
                println!("  - {}", version);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_missing_database_url_fails_before_connecting() {
        let handler = MigrateCommandHandler::new(Settings::default());
        let result = handler.execute(&MigrateArgs::default()).await;
        assert!(matches!(result, Err(AppError::Configuration { key, .. }) if key == "database.url"));
    }
}
