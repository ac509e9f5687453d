pub mod error;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::models::{
    Config, ConfigMetadata, ConfigSource, ContactConfig, DisplayConfig,
    StorefrontConfig,
};
use crate::sources::{
    ENV_BANNER_INTERVAL, ENV_CONTACT_NUMBER, ENV_STOREFRONT_TOKEN,
    ENV_STOREFRONT_URL, EnvConfig, FileConfig,
};
use crate::validation::ConfigWarnings;
use error::ConfigLoadError;

const DEFAULT_CONFIG_LOCATIONS: &[&str] = &[
    "sandtrail.toml",
    "sandtrail.json",
    "config/sandtrail.toml",
    "config/sandtrail.json",
];

#[derive(Debug, Default, Clone)]
struct ConfigLoaderOptions {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
    /// Directory searched for `.env` and the default config locations.
    /// Defaults to the working directory.
    search_root: Option<PathBuf>,
    /// Use these variables instead of the process environment.
    env_vars: Option<HashMap<String, String>>,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_search_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.search_root = Some(root.into());
        self
    }

    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.options.env_vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (vars, env_file_loaded) = self.environment()?;
        let env = EnvConfig::from_map(&vars);

        let source = self.config_source(&env);
        let file = match source.path() {
            Some(path) => read_file_config(path)?,
            None => FileConfig::default(),
        };
        debug!(?source, env_file_loaded, "resolved configuration sources");

        let mut metadata = ConfigMetadata {
            source,
            env_file_loaded,
            env_overrides: Vec::new(),
        };
        let mut warnings = ConfigWarnings::default();
        let config = compose_config(file, env, &mut metadata, &mut warnings)?;

        Ok(ConfigLoad {
            config: Config { metadata, ..config },
            warnings,
        })
    }

    fn root(&self) -> PathBuf {
        self.options
            .search_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Process (or injected) variables layered over `.env`; existing
    /// variables win, as with `dotenvy::dotenv`.
    fn environment(
        &self,
    ) -> Result<(HashMap<String, String>, bool), ConfigLoadError> {
        let mut vars: HashMap<String, String> = match &self.options.env_vars {
            Some(vars) => vars.clone(),
            None => std::env::vars().collect(),
        };

        let (env_path, explicit) = match &self.options.env_file {
            Some(path) => (path.clone(), true),
            None => (self.root().join(".env"), false),
        };
        if !env_path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path: env_path });
            }
            return Ok((vars, false));
        }

        for entry in dotenvy::from_path_iter(&env_path)? {
            let (key, value) = entry?;
            vars.entry(key).or_insert(value);
        }
        Ok((vars, true))
    }

    fn config_source(&self, env: &EnvConfig) -> ConfigSource {
        if let Some(path) = &self.options.config_path {
            return ConfigSource::Explicit(path.clone());
        }
        if let Some(path) = &env.config_path {
            return ConfigSource::EnvPath(PathBuf::from(path));
        }
        let root = self.root();
        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|candidate| candidate.exists())
            .map(ConfigSource::File)
            .unwrap_or_default()
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::MissingConfig {
            path: path.to_path_buf(),
        });
    }
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let parse_error = |message: String| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        message,
    };
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents)
            .map_err(|err| parse_error(err.to_string())),
        Some("toml") => {
            toml::from_str(&contents).map_err(|err| parse_error(err.to_string()))
        }
        // Unknown extension: TOML first, then JSON.
        _ => toml::from_str(&contents).or_else(|toml_err| {
            serde_json::from_str(&contents).map_err(|json_err| {
                parse_error(format!(
                    "toml error: {toml_err}; json error: {json_err}"
                ))
            })
        }),
    }
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    metadata: &mut ConfigMetadata,
    warnings: &mut ConfigWarnings,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        storefront: file_storefront,
        contact: file_contact,
        display: file_display,
    } = file;

    let mut overridden = |key: &'static str, value: Option<String>| {
        if value.is_some() {
            metadata.env_overrides.push(key);
        }
        value
    };
    let env_url = overridden(ENV_STOREFRONT_URL, env.storefront_url);
    let env_token = overridden(ENV_STOREFRONT_TOKEN, env.storefront_token);
    let env_number = overridden(ENV_CONTACT_NUMBER, env.contact_number);
    let env_interval = overridden(ENV_BANNER_INTERVAL, env.banner_interval);

    let endpoint = match env_url.or(file_storefront.endpoint) {
        Some(raw) => Some(Url::parse(raw.trim()).map_err(|source| {
            ConfigLoadError::InvalidEndpoint { value: raw.clone(), source }
        })?),
        None => {
            warnings.push_with_hint(
                "No storefront endpoint configured",
                format!("Set {ENV_STOREFRONT_URL} or [storefront].endpoint"),
            );
            None
        }
    };

    let access_token = env_token
        .or(file_storefront.access_token)
        .unwrap_or_default();
    if endpoint.is_some() && access_token.is_empty() {
        warnings.push("Storefront access token is empty");
    }

    let storefront = StorefrontConfig {
        endpoint,
        access_token,
        timeout: match file_storefront.timeout {
            Some(raw) => parse_duration("storefront.timeout", &raw)?,
            None => StorefrontConfig::default().timeout,
        },
    };

    let whatsapp_number = env_number
        .or(file_contact.whatsapp_number)
        .unwrap_or_default();
    if !whatsapp_number.chars().any(|c| c.is_ascii_digit()) {
        warnings.push_with_hint(
            "No contact number configured; booking enquiries are disabled",
            format!("Set {ENV_CONTACT_NUMBER} or [contact].whatsapp_number"),
        );
    }

    let defaults = DisplayConfig::default();
    let banner_interval = match env_interval.or(file_display.banner_interval) {
        Some(raw) => parse_duration("display.banner_interval", &raw)?,
        None => defaults.banner_interval,
    };
    let popular_count = file_display.popular_count.unwrap_or(defaults.popular_count);
    if popular_count == 0 {
        return Err(ConfigLoadError::ZeroPopularCount);
    }
    let currency_code = file_display
        .currency_code
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .unwrap_or(defaults.currency_code);

    Ok(Config {
        storefront,
        contact: ContactConfig { whatsapp_number },
        display: DisplayConfig {
            banner_interval,
            popular_count,
            currency_code,
        },
        metadata: ConfigMetadata::default(),
    })
}

fn parse_duration(key: &'static str, raw: &str) -> Result<Duration, ConfigLoadError> {
    let duration = humantime::parse_duration(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            key,
            value: raw.to_string(),
            source,
        }
    })?;
    if duration.is_zero() {
        return Err(ConfigLoadError::ZeroDuration { key });
    }
    Ok(duration)
}
