//! Configuration loading functionality.
//!
//! Settings come from an optional YAML file with environment variables
//! layered on top, so deployments can run from environment alone.

use std::env;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Environment variable overriding the ERP base URL.
pub const ENV_ERP_API_BASE: &str = "ERP_API_BASE";
/// Environment variable overriding the ERP bearer token.
pub const ENV_API_BEARER_TOKEN: &str = "API_BEARER_TOKEN";
/// Environment variable overriding the embedding API key.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Loads configuration from a YAML file and applies environment overrides.
///
/// # Arguments
///
/// * `path` - Path to the configuration file (e.g., "./engine.yaml")
///
/// # Returns
///
/// Returns the parsed configuration, or an error if the file is
/// missing or contains invalid YAML. Sections absent from the file
/// keep their defaults.
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::load_config;
///
/// let config = load_config("./engine.yaml")?;
/// println!("ERP base: {}", config.erp.base_url);
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> EngineResult<EngineConfig> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let mut config: EngineConfig =
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })?;

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Builds a configuration from defaults and environment variables only.
pub fn config_from_env() -> EngineConfig {
    let mut config = EngineConfig::default();
    apply_env_overrides(&mut config);
    config
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn apply_env_overrides(config: &mut EngineConfig) {
    if let Some(base_url) = non_empty_var(ENV_ERP_API_BASE) {
        config.erp.base_url = base_url;
    }
    if let Some(token) = non_empty_var(ENV_API_BEARER_TOKEN) {
        config.erp.bearer_token = Some(token);
    }
    if let Some(api_key) = non_empty_var(ENV_OPENAI_API_KEY) {
        config.embedding.api_key = Some(api_key);
    }
}
