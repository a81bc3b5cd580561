//! Configuration validation logic.

use std::path::Path;

use crate::config::loader::LocatorConfig;
use crate::error::{Error, Result};
use crate::fs::naming::is_invalid_file_name_char;

/// Validate the entire configuration.
pub fn validate_config(config: &LocatorConfig) -> Result<()> {
    if let Some(app_name) = &config.app_name {
        validate_app_name(app_name)?;
    }
    if let Some(data_root) = &config.data_root {
        validate_data_root(data_root)?;
    }

    Ok(())
}

/// Validate an application name used as a single directory component.
pub fn validate_app_name(app_name: &str) -> Result<()> {
    if app_name.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "app_name".to_string(),
            message: "Application name cannot be empty or whitespace-only".to_string(),
        });
    }

    if app_name == "." || app_name == ".." {
        return Err(Error::ConfigValidation {
            field: "app_name".to_string(),
            message: format!("'{}' is not a usable directory name", app_name),
        });
    }

    // Apostrophes are fine in a directory name on every host.
    let forbidden = |c: char| c != '\'' && is_invalid_file_name_char(c);
    if app_name.chars().any(forbidden) {
        let suggestion: String = app_name
            .chars()
            .map(|c| if forbidden(c) { '_' } else { c })
            .collect();
        return Err(Error::ConfigValidation {
            field: "app_name".to_string(),
            message: format!(
                "'{}' contains characters not allowed in a file name (try '{}')",
                app_name, suggestion
            ),
        });
    }

    Ok(())
}

/// Validate the data root override.
pub fn validate_data_root(data_root: &Path) -> Result<()> {
    if !data_root.is_absolute() {
        return Err(Error::ConfigValidation {
            field: "data_root".to_string(),
            message: format!("Path must be absolute (got {})", data_root.display()),
        });
    }

    Ok(())
}
