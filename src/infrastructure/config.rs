use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

fn default_auth_request_timeout() -> u64 {
  10
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub auth_api: AuthApiConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

/// Auth provider API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthApiConfig {
  /// Base URL of the auth API, e.g. http://localhost:3333
  pub base_url: String,
  #[serde(default = "default_auth_request_timeout")]
  pub request_timeout_seconds: u64,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override
  /// earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with AGENDLY_ prefix, e.g.
  ///    `AGENDLY_SERVER__PORT=8080`, `AGENDLY_AUTH_API__BASE_URL=...`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if required files or values are missing or the
  /// TOML is invalid.
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("AGENDLY")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_structure() {
    let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [auth_api]
            base_url = "http://localhost:3333"
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.auth_api.base_url, "http://localhost:3333");
    assert_eq!(config.auth_api.request_timeout_seconds, 10); // default
  }
}
