use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HubConfig {
    /// Base address of the recipe provider, without a trailing endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Number of random recipes shown on the home page
    #[serde(default = "default_random_count")]
    pub random_count: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            random_count: default_random_count(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_random_count() -> usize {
    10
}

impl HubConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPEHUB__ prefix
    /// 2. recipehub.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPEHUB__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`HubConfig::load`] for the priority order.
pub fn load_config() -> Result<HubConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipehub").required(false))
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

/// Environment variables with RECIPEHUB__ prefix, e.g. RECIPEHUB__TIMEOUT
fn environment() -> Environment {
    Environment::with_prefix("RECIPEHUB")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = HubConfig::default();
        assert_eq!(config.base_url, "https://www.themealdb.com/api/json/v1/1");
        assert_eq!(config.timeout, 30);
        assert_eq!(config.random_count, 10);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "timeout = 5\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: HubConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.timeout, 5);
        assert_eq!(config.base_url, default_base_url());
        assert_eq!(config.random_count, default_random_count());
    }

    #[test]
    fn test_file_overrides_base_url() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "base_url = \"http://localhost:8080/api\"\nrandom_count = 3\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: HubConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.random_count, 3);
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut vars = config::Map::new();
        vars.insert(
            "RECIPEHUB__BASE_URL".to_string(),
            "http://env.example/api".to_string(),
        );
        vars.insert("RECIPEHUB__TIMEOUT".to_string(), "12".to_string());

        let settings = Config::builder()
            .add_source(File::from_str(
                "base_url = \"http://file.example/api\"\ntimeout = 5\nrandom_count = 4\n",
                config::FileFormat::Toml,
            ))
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap();
        let config: HubConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.base_url, "http://env.example/api");
        assert_eq!(config.timeout, 12);
        // Not set in the environment, so the file value stays
        assert_eq!(config.random_count, 4);
    }

    #[test]
    fn test_environment_ignores_other_prefixes() {
        let mut vars = config::Map::new();
        vars.insert("COOKING__TIMEOUT".to_string(), "99".to_string());

        let settings = Config::builder()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap();
        let config: HubConfig = settings.try_deserialize().unwrap();

        assert_eq!(config, HubConfig::default());
    }
}
