use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const ENV_CONFIG_PATH: &str = "SANDTRAIL_CONFIG_PATH";
pub const ENV_STOREFRONT_URL: &str = "SANDTRAIL_STOREFRONT_URL";
pub const ENV_STOREFRONT_TOKEN: &str = "SANDTRAIL_STOREFRONT_TOKEN";
pub const ENV_CONTACT_NUMBER: &str = "SANDTRAIL_CONTACT_NUMBER";
pub const ENV_BANNER_INTERVAL: &str = "SANDTRAIL_BANNER_INTERVAL";

/// Raw configuration as written in `sandtrail.toml` (or `.json`).
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub storefront: FileStorefrontConfig,
    #[serde(default)]
    pub contact: FileContactConfig,
    #[serde(default)]
    pub display: FileDisplayConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileStorefrontConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Humantime duration, e.g. `"10s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileContactConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileDisplayConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

/// `SANDTRAIL_*` variables relevant to configuration. Blank values count as
/// unset.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<String>,
    pub storefront_url: Option<String>,
    pub storefront_token: Option<String>,
    pub contact_number: Option<String>,
    pub banner_interval: Option<String>,
}

impl EnvConfig {
    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            config_path: read(ENV_CONFIG_PATH),
            storefront_url: read(ENV_STOREFRONT_URL),
            storefront_token: read(ENV_STOREFRONT_TOKEN),
            contact_number: read(ENV_CONTACT_NUMBER),
            banner_interval: read(ENV_BANNER_INTERVAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_env_values_are_unset() {
        let vars = HashMap::from([
            (ENV_STOREFRONT_URL.to_string(), "  ".to_string()),
            (ENV_CONTACT_NUMBER.to_string(), "+971 50".to_string()),
        ]);
        let env = EnvConfig::from_map(&vars);
        assert!(env.storefront_url.is_none());
        assert_eq!(env.contact_number.as_deref(), Some("+971 50"));
    }

    #[test]
    fn file_sections_are_optional() {
        let parsed: FileConfig = toml::from_str("[contact]\nwhatsapp_number = \"971500000000\"\n").unwrap();
        assert!(parsed.storefront.endpoint.is_none());
        assert_eq!(parsed.contact.whatsapp_number.as_deref(), Some("971500000000"));
    }
}
