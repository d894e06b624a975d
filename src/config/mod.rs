use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::proto::WireFormat;

/// Prefix for environment overrides, e.g. `PETCLINIC__WEB__PORT=8080`
pub const ENV_PREFIX: &str = "PETCLINIC";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub web: WebConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: Option<u32>,
    /// Load the classic clinic sample data after migrating
    #[serde(default)]
    pub seed_sample_data: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    /// Prefix every API route is nested under
    pub base_path: String,
    /// Response encoding when the client's Accept header names neither format
    #[serde(default)]
    pub default_format: WireFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite://./petclinic.db".to_string(),
                max_connections: Some(5),
                seed_sample_data: false,
            },
            web: WebConfig {
                host: "0.0.0.0".to_string(),
                port: 9966,
                base_path: "/petclinic/api".to_string(),
                default_format: WireFormat::Protobuf,
            },
        }
    }
}

impl Config {
    /// Load configuration from defaults, an optional TOML file, and the
    /// `PETCLINIC__*` environment, later sources winning.
    pub fn load<P: AsRef<Path>>(config_file: P) -> Result<Self> {
        let config_file = config_file.as_ref();

        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?);

        if config_file.exists() {
            info!("Reading configuration file {}", config_file.display());
            builder = builder.add_source(config::File::from(config_file).required(true));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Render this configuration as TOML, for `--print-config`
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = Config::load("/nonexistent/petclinic.toml").unwrap();
        assert_eq!(config.web.port, 9966);
        assert_eq!(config.web.base_path, "/petclinic/api");
        assert_eq!(config.web.default_format, WireFormat::Protobuf);
        assert!(!config.database.seed_sample_data);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[database]
url = "sqlite://./other.db"
seed_sample_data = true

[web]
host = "127.0.0.1"
port = 8081
base_path = "/api"
default_format = "json"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.database.url, "sqlite://./other.db");
        assert!(config.database.seed_sample_data);
        assert_eq!(config.web.port, 8081);
        assert_eq!(config.web.base_path, "/api");
        assert_eq!(config.web.default_format, WireFormat::Json);
        // Untouched keys keep their defaults
        assert_eq!(config.database.max_connections, Some(5));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let rendered = Config::default().to_toml().unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.web.port, 9966);
        assert_eq!(parsed.web.default_format, WireFormat::Protobuf);
    }
}
