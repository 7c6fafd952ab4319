//! Layered configuration loading.
//!
//! Sources, lowest priority first:
//! 1. `{dir}/default.toml` (required)
//! 2. `{dir}/{environment}.toml`
//! 3. `{dir}/local.toml`
//! 4. `RH_*` environment variables, `__` separating nested keys
//!
//! A single file (`RH_CONFIG_FILE` or `--config`) replaces the first three
//! layers; environment variables still apply on top of it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

const CONFIG_DIR_ENV: &str = "RH_CONFIG_DIR";
const CONFIG_FILE_ENV: &str = "RH_CONFIG_FILE";
const DEFAULT_CONFIG_DIR: &str = "config";
const ENV_PREFIX: &str = "RH";
const ENV_SEPARATOR: &str = "__";

/// Where the file layers come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Layered(PathBuf),
    File(PathBuf),
}

impl Default for ConfigSource {
    fn default() -> Self {
        ConfigSource::Layered(PathBuf::from(DEFAULT_CONFIG_DIR))
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    source: ConfigSource,
    environment: Environment,
    /// Replaces the process environment as the `RH_*` source when set.
    env_vars: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    /// Resolves the source from `RH_CONFIG_DIR`, `RH_CONFIG_FILE` and `RH_APP_ENV`.
    ///
    /// # Errors
    ///
    /// `MutualExclusivityError` when both `RH_CONFIG_DIR` and `RH_CONFIG_FILE` are set.
    pub fn new() -> Result<Self, ConfigError> {
        let source = resolve_source(
            std::env::var(CONFIG_DIR_ENV).ok(),
            std::env::var(CONFIG_FILE_ENV).ok(),
        )?;

        Ok(Self {
            source,
            environment: Environment::from_env(),
            env_vars: None,
        })
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = ConfigSource::File(path.into());
        self
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source = ConfigSource::Layered(dir.into());
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Reads `RH_*` overrides from `vars` instead of the process environment.
    pub fn with_env_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.env_vars = Some(vars);
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// Reads and validates all sources.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let settings = self.read()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads all sources without validating, so callers can apply their own
    /// overrides first.
    pub fn read(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = match &self.source {
            ConfigSource::File(path) => add_file(Config::builder(), path, true)?,
            ConfigSource::Layered(dir) => {
                let builder = add_file(Config::builder(), &dir.join("default.toml"), true)?;
                let env_file = dir.join(format!("{}.toml", self.environment.as_str()));
                let builder = add_file(builder, &env_file, false)?;
                add_file(builder, &dir.join("local.toml"), false)?
            }
        };

        let env_source = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .ignore_empty(true)
            .try_parsing(true)
            .source(self.env_vars.clone());

        Ok(builder.add_source(env_source).build()?)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            source: ConfigSource::default(),
            environment: Environment::default(),
            env_vars: None,
        }
    }
}

fn resolve_source(dir: Option<String>, file: Option<String>) -> Result<ConfigSource, ConfigError> {
    match (dir, file) {
        (Some(_), Some(_)) => Err(ConfigError::MutualExclusivityError(format!(
            "{CONFIG_DIR_ENV} and {CONFIG_FILE_ENV} cannot both be set"
        ))),
        (_, Some(file)) => Ok(ConfigSource::File(PathBuf::from(file))),
        (Some(dir), None) => Ok(ConfigSource::Layered(PathBuf::from(dir))),
        (None, None) => Ok(ConfigSource::default()),
    }
}

fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if required && !path.is_file() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .to_str()
        .ok_or_else(|| ConfigError::ParseError(format!("non UTF-8 path: {}", path.display())))?;

    Ok(builder.add_source(File::new(name, FileFormat::Toml).required(required)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DEFAULT_TOML: &str = r#"
        [server]
        host = "0.0.0.0"
        port = 3000

        [database]
        url = "postgres://rh:rh@localhost:5432/rh"
    "#;

    fn config_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    fn loader(dir: &TempDir) -> ConfigLoader {
        ConfigLoader::default()
            .with_dir(dir.path())
            .with_env_vars(HashMap::new())
    }

    #[test]
    fn test_default_toml_is_required() {
        let dir = config_dir(&[]);
        assert!(matches!(loader(&dir).load(), Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_layer_precedence() {
        let dir = config_dir(&[
            ("default.toml", DEFAULT_TOML),
            ("production.toml", "[server]\nport = 8080\n[database]\nmax_connections = 40\n"),
            ("local.toml", "[server]\nport = 9090\n"),
        ]);

        let settings = loader(&dir)
            .with_environment(Environment::Production)
            .load()
            .unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.database.max_connections, 40);
    }

    #[test]
    fn test_environment_file_of_other_environment_is_ignored() {
        let dir = config_dir(&[
            ("default.toml", DEFAULT_TOML),
            ("staging.toml", "[server]\nport = 7000\n"),
        ]);

        let settings = loader(&dir)
            .with_environment(Environment::Test)
            .load()
            .unwrap();

        assert_eq!(settings.server.port, 3000);
    }

    #[test]
    fn test_env_vars_override_files() {
        let dir = config_dir(&[("default.toml", DEFAULT_TOML)]);
        let vars = HashMap::from([
            ("RH_SERVER__PORT".to_string(), "4000".to_string()),
            ("RH_JWT__SECRET".to_string(), "s".repeat(40)),
            ("RH_LOGGER__FILE__ENABLED".to_string(), "true".to_string()),
        ]);

        let settings = loader(&dir).with_env_vars(vars).load().unwrap();

        assert_eq!(settings.server.port, 4000);
        assert_eq!(settings.jwt.secret.len(), 40);
        assert!(settings.logger.file.enabled);
    }

    #[test]
    fn test_single_file_skips_layers() {
        let dir = config_dir(&[
            ("default.toml", DEFAULT_TOML),
            ("custom.toml", "[database]\nurl = \"postgres://localhost/other\"\n"),
        ]);

        let settings = loader(&dir)
            .with_file(dir.path().join("custom.toml"))
            .load()
            .unwrap();

        assert_eq!(settings.database.url, "postgres://localhost/other");
        assert_eq!(settings.server.host, "127.0.0.1");
    }

    #[test]
    fn test_load_validates_but_read_does_not() {
        let dir = config_dir(&[("default.toml", "[server]\nport = 0\n")]);

        assert!(matches!(
            loader(&dir).load(),
            Err(ConfigError::ValidationError { .. })
        ));
        assert_eq!(loader(&dir).read().unwrap().server.port, 0);
    }

    #[test]
    fn test_malformed_toml() {
        let dir = config_dir(&[("default.toml", "[server\nport = ")]);
        assert!(loader(&dir).read().is_err());
    }

    #[test]
    fn test_resolve_source() {
        assert_eq!(resolve_source(None, None).unwrap(), ConfigSource::default());
        assert_eq!(
            resolve_source(Some("/etc/rh".into()), None).unwrap(),
            ConfigSource::Layered(PathBuf::from("/etc/rh"))
        );
        assert_eq!(
            resolve_source(None, Some("rh.toml".into())).unwrap(),
            ConfigSource::File(PathBuf::from("rh.toml"))
        );
        assert!(matches!(
            resolve_source(Some("a".into()), Some("b".into())),
            Err(ConfigError::MutualExclusivityError(_))
        ));
    }
}
