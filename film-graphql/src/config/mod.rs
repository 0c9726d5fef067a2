pub mod builder;
pub mod loader;
pub mod types;
pub mod validator;

pub use builder::ClientConfigBuilder;
pub use loader::{ConfigLoader, DefaultConfigLoader, DEFAULT_CONFIG_FILE};
pub use types::{
    parse_endpoint, ClientConfig, ClientSection, ConfigFile, EndpointSource, DEFAULT_ENDPOINT_ENV,
};
pub use validator::ConfigValidatorImpl;
