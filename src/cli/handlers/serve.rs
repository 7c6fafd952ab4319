//! `serve`: start the server, or only check the configuration with `--dry-run`.

use crate::config::{Environment, Settings};
use crate::server::Server;

pub struct ServeCommandHandler {
    config: Settings,
    environment: Environment,
}

impl ServeCommandHandler {
    pub fn new(config: Settings, environment: Environment) -> Self {
        Self {
            config,
            environment,
        }
    }

    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            return self.check();
        }
        Server::new(self.config, self.environment).run().await
    }

    /// Runs every startup check that does not need the network.
    pub fn check(&self) -> anyhow::Result<()> {
        self.config.validate()?;
        self.config.jwt.validate()?;

        println!("✓ Configuration is valid ({} environment)", self.environment);
        println!("✓ Server would bind to {}", self.config.server.address());
        println!(
            "✓ Database pool: {}..{} connections, auto_migrate = {}",
            self.config.database.min_connections,
            self.config.database.max_connections,
            self.config.database.auto_migrate
        );
        println!("✓ Log level: {}", self.config.logger.level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/rh".to_string();
        config.jwt.secret = "s".repeat(32);
        config
    }

    #[tokio::test]
    async fn test_dry_run_with_valid_config() {
        let handler = ServeCommandHandler::new(valid_config(), Environment::Test);
        assert!(handler.execute(true).await.is_ok());
    }

    #[tokio::test]
    async fn test_dry_run_rejects_invalid_server() {
        let mut config = valid_config();
        config.server.port = 0;
        let handler = ServeCommandHandler::new(config, Environment::Test);
        assert!(handler.execute(true).await.is_err());
    }

    #[test]
    fn test_check_requires_jwt_secret() {
        let mut config = valid_config();
        config.jwt.secret.clear();
        let err = ServeCommandHandler::new(config, Environment::Test)
            .check()
            .unwrap_err();
        assert!(err.to_string().contains("jwt.secret"));
    }
}
