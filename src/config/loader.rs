//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use crate::config::schema::{AppConfig, SecretString};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_ENV_VAR: &str = "CRYPTO_TRACKER_CONFIG";

/// Environment variable holding the signing key.
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// Environment variable holding the indexing API key.
pub const API_KEY_ENV_VAR: &str = "MORALIS_API_KEY";

/// Environment variable overriding the default chain.
pub const CHAIN_ENV_VAR: &str = "CHAIN";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse a configuration from TOML text without validating it.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

/// Load a configuration from a TOML file (unvalidated).
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Overlay environment values on a base configuration.
///
/// `lookup` stands in for `std::env::var`; empty values count as unset.
pub fn apply_env<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(chain) = get(CHAIN_ENV_VAR) {
        config.defaults.chain = chain;
    }
    config.secrets.private_key = get(PRIVATE_KEY_ENV_VAR).map(SecretString::new);
    config.secrets.indexer_api_key = get(API_KEY_ENV_VAR).map(SecretString::new);
    config
}

/// Build the configuration from an optional file plus the given environment, then validate.
pub fn load_with<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match lookup(CONFIG_PATH_ENV_VAR).filter(|p| !p.is_empty()) {
        Some(path) => load_config_file(Path::new(&path))?,
        None => AppConfig::default(),
    };

    let config = apply_env(base, lookup);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Build the configuration from the process environment.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    load_with(|key| std::env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::ChainId;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = parse_config(
            r#"
            [defaults]
            chain = "polygon"

            [transfer]
            confirmations = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.defaults.chain, "polygon");
        assert_eq!(config.defaults.history_limit, 20);
        assert_eq!(config.transfer.confirmations, 3);
        assert!(config.transfer.verify_chain_id);
    }

    #[test]
    fn test_example_file_is_valid() {
        let config = parse_config(include_str!("../../crypto-tracker.example.toml")).unwrap();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[defaults\nchain = 1").unwrap_err();
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_env_overlay() {
        let config = load_with(env(&[
            ("CHAIN", "bsc"),
            ("PRIVATE_KEY", "0xabc"),
            ("MORALIS_API_KEY", "key"),
        ]))
        .unwrap();
        assert_eq!(config.defaults.chain, "bsc");
        assert_eq!(config.secrets.private_key.unwrap().expose(), "0xabc");
        assert_eq!(config.secrets.indexer_api_key.unwrap().expose(), "key");
    }

    #[test]
    fn test_empty_env_values_are_unset() {
        let config = load_with(env(&[("CHAIN", ""), ("PRIVATE_KEY", "  ")])).unwrap();
        assert_eq!(config.defaults.chain, "eth");
        assert!(config.secrets.private_key.is_none());
    }

    #[test]
    fn test_unknown_env_chain_deferred_to_commands() {
        let config = load_with(env(&[("CHAIN", "moonbeam")])).unwrap();
        assert_eq!(config.defaults.chain, "moonbeam");
        let err = config.resolve_chain(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Unsupported chain \"moonbeam\". Choose from: {}", ChainId::supported_list())
        );
        assert_eq!(config.resolve_chain(Some("bsc")).unwrap(), ChainId::Bsc);
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_with(env(&[(CONFIG_PATH_ENV_VAR, "/nonexistent/tracker.toml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
