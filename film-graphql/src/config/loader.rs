use crate::config::types::{ClientConfig, ConfigFile};
use crate::config::validator::ConfigValidatorImpl;
use crate::error::{ClientError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;

/// Default name of the optional configuration file
pub const DEFAULT_CONFIG_FILE: &str = "films.toml";

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig>;
    fn load_or_default<P: AsRef<Path>>(path: P) -> Result<ClientConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load and validate configuration from a TOML file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ClientError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;

        let file: ConfigFile = toml::from_str(&content).map_err(|e| {
            ClientError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        let config = ClientConfig::try_from(file)?;
        ConfigValidatorImpl::new().validate(&config)?;
        Ok(config)
    }

    /// Load the file when it exists, otherwise fall back to defaults
    fn load_or_default<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "no configuration file, using defaults");
            Ok(ClientConfig::default())
        }
    }
}

// Convenience functions maintaining the API
impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::ClientConfigBuilder {
        crate::config::builder::ClientConfigBuilder::new()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration from a TOML file if present
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_or_default(path)
    }
}
