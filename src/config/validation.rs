//! Range and format checks for each settings section.
//!
//! `Settings::validate` runs when configuration is loaded. JWT settings are
//! checked separately by the server, so `migrate` works without a secret.

use crate::config::error::ConfigError;
use crate::config::settings::{DatabaseConfig, JwtConfig, ServerConfig, Settings};
use crate::logger::LoggerConfig;

const MIN_JWT_SECRET_LEN: usize = 32;

const DATABASE_URL_SCHEMES: &[&str] = &["postgres://", "postgresql://"];

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Host cannot be empty.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL is required. Set it in the config file or via RH_DATABASE__URL.",
            ));
        }

        if !DATABASE_URL_SCHEMES
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
        {
            return Err(ConfigError::validation(
                "database.url",
                "Invalid database URL. Expected postgres://[user:password@]host[:port]/database",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            ));
        }

        if self.connection_timeout == 0 {
            return Err(ConfigError::validation(
                "database.connection_timeout",
                "Connection timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl JwtConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret cannot be empty. Set RH_JWT__SECRET.",
            ));
        }

        if self.secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::validation(
                "jwt.secret",
                format!("JWT secret must be at least {MIN_JWT_SECRET_LEN} characters."),
            ));
        }

        if self.access_token_expiration <= 0 {
            return Err(ConfigError::validation(
                "jwt.access_token_expiration",
                "Access token expiration must be positive.",
            ));
        }

        if self.refresh_token_expiration <= self.access_token_expiration {
            return Err(ConfigError::validation(
                "jwt.refresh_token_expiration",
                "Refresh token expiration must be longer than access token expiration.",
            ));
        }

        Ok(())
    }
}

fn validate_logger(logger: &LoggerConfig) -> Result<(), ConfigError> {
    logger
        .validate()
        .map_err(|e| ConfigError::validation("logger", e.to_string()))
}

impl Settings {
    /// Returns the first failing section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        validate_logger(&self.logger)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://rh:rh@localhost:5432/rh".to_string();
        settings
    }

    fn failing_field(result: Result<(), ConfigError>) -> String {
        match result {
            Err(err) => err.field().unwrap_or_default().to_string(),
            Ok(()) => panic!("expected a validation error"),
        }
    }

    #[test]
    fn test_valid_settings() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_server_port_zero() {
        let mut settings = valid_settings();
        settings.server.port = 0;
        assert_eq!(failing_field(settings.validate()), "server.port");
    }

    #[test]
    fn test_server_request_timeout_zero() {
        let mut settings = valid_settings();
        settings.server.request_timeout = 0;
        assert_eq!(failing_field(settings.validate()), "server.request_timeout");
    }

    #[test]
    fn test_database_url_required() {
        let settings = Settings::default();
        assert_eq!(failing_field(settings.validate()), "database.url");
    }

    #[test]
    fn test_database_url_scheme() {
        let mut config = valid_settings().database;
        config.url = "mysql://localhost/rh".to_string();
        assert_eq!(failing_field(config.validate()), "database.url");

        config.url = "postgresql://localhost/rh".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_min_exceeds_max() {
        let mut config = valid_settings().database;
        config.max_connections = 2;
        config.min_connections = 5;
        assert_eq!(failing_field(config.validate()), "database.min_connections");
    }

    #[test]
    fn test_logger_level_invalid() {
        let mut settings = valid_settings();
        settings.logger.level = "chatty".to_string();
        assert_eq!(failing_field(settings.validate()), "logger");
    }

    #[test]
    fn test_jwt_rules() {
        let mut jwt = JwtConfig::default();
        assert_eq!(failing_field(jwt.validate()), "jwt.secret");

        jwt.secret = "short".to_string();
        assert_eq!(failing_field(jwt.validate()), "jwt.secret");

        jwt.secret = "a".repeat(MIN_JWT_SECRET_LEN);
        assert!(jwt.validate().is_ok());

        jwt.refresh_token_expiration = jwt.access_token_expiration;
        assert_eq!(failing_field(jwt.validate()), "jwt.refresh_token_expiration");
    }
}
