//! Configuration module for the directory locator.
//!
//! This module handles:
//! - Loading and saving `LocatorConfig` from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::LocatorConfig;
pub use validation::{validate_app_name, validate_config, validate_data_root};
