//! Configuration loading and management for the leave engine.
//!
//! Settings live in a single YAML file with three sections (`erp`,
//! `embedding`, `search`); every field has a default, and credentials
//! can be supplied through environment variables instead.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::load_config;
//!
//! let config = load_config("./engine.yaml").unwrap();
//! println!("ERP base: {}", config.erp.base_url);
//! ```

mod loader;
mod types;

pub use loader::{
    config_from_env, load_config, ENV_API_BEARER_TOKEN, ENV_ERP_API_BASE, ENV_OPENAI_API_KEY,
};
pub use types::{EmbeddingConfig, EngineConfig, ErpConfig, SearchConfig};
