use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime settings for the import server
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Port the HTTP server binds to
    #[serde(default = "default_port")]
    pub port: u16,
    /// Timeout for outbound page fetches in seconds. Unset means a request
    /// is allowed to run as long as the upstream takes.
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            port: default_port(),
            fetch_timeout_secs: None,
        }
    }
}

fn default_port() -> u16 {
    3000
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_IMPORT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_IMPORT__PORT
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested keys: RECIPE_IMPORT__PORT
            .add_source(
                Environment::with_prefix("RECIPE_IMPORT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
