use std::path::PathBuf;
use std::time::Duration;

use sandtrail_core::pricing::PriceFormatter;
use sandtrail_core::storefront::StorefrontSettings;
use url::Url;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_BANNER_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_POPULAR_COUNT: usize = 10;
pub const DEFAULT_CURRENCY_CODE: &str = "AED";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub storefront: StorefrontConfig,
    pub contact: ContactConfig,
    pub display: DisplayConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// GraphQL endpoint of the hosted storefront. `None` until configured.
    pub endpoint: Option<Url>,
    pub access_token: String,
    pub timeout: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            access_token: String::new(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactConfig {
    /// Messaging number for booking enquiries, any formatting.
    pub whatsapp_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub banner_interval: Duration,
    pub popular_count: usize,
    pub currency_code: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            banner_interval: DEFAULT_BANNER_INTERVAL,
            popular_count: DEFAULT_POPULAR_COUNT,
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

/// Where the configuration file came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    File(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ConfigSource::Default => None,
            ConfigSource::Explicit(path)
            | ConfigSource::EnvPath(path)
            | ConfigSource::File(path) => Some(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigMetadata {
    pub source: ConfigSource,
    pub env_file_loaded: bool,
    /// Environment variables that overrode file or default values.
    pub env_overrides: Vec<&'static str>,
}

impl Config {
    /// Settings handed to the storefront handle.
    pub fn storefront_settings(&self) -> StorefrontSettings {
        StorefrontSettings {
            contact_number: self.contact.whatsapp_number.clone(),
            prices: PriceFormatter::new(self.display.currency_code.clone()),
            banner_interval: self.display.banner_interval,
            popular_count: self.display.popular_count,
        }
    }
}
