use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the collaborators around the extractor.
///
/// The extractor itself reads no configuration; only fetching does.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ImportConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Configuration for fetching recipe pages
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Maximum number of pages fetched at once in batch mode
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            max_concurrent: default_max_concurrent(),
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; CuisineCraftBot/1.0)".to_string()
}

fn default_max_concurrent() -> usize {
    4
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with CUISINECRAFT__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: CUISINECRAFT__FETCH__TIMEOUT
pub fn load_config() -> Result<ImportConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: CUISINECRAFT__FETCH__USER_AGENT
        .add_source(
            Environment::with_prefix("CUISINECRAFT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
