//! Application data and temporary directory management.

use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::{debug, info};

use crate::config::{validate_config, LocatorConfig};
use crate::error::{Error, Result};
use crate::fs::naming::{make_unique_filename, sanitize_filename, EMPTY_NAME_PLACEHOLDER};

/// Name of the temporary subdirectory inside the application directory.
pub const TEMP_DIR_NAME: &str = "tmp";

/// Resolves the per-application directory tree `<root>/<app_name>/` and its
/// `tmp/` child.
///
/// Nothing is cached: every call recomputes the path and recreates the
/// directory if it has been removed in the meantime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    root: PathBuf,
    app_name: String,
}

impl AppDirs {
    /// Use an explicit data root and application name.
    pub fn new(root: impl Into<PathBuf>, app_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            app_name: app_name.into(),
        }
    }

    /// Use the current user's data directory and the running program's name.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(user_data_root()?, program_name()))
    }

    /// Use the overrides from `config`, falling back to the host values.
    pub fn from_config(config: &LocatorConfig) -> Result<Self> {
        validate_config(config)?;

        let root = match &config.data_root {
            Some(root) => root.clone(),
            None => user_data_root()?,
        };
        let app_name = config.app_name.clone().unwrap_or_else(program_name);

        Ok(Self::new(root, app_name))
    }

    /// The data root the application directory lives under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get `<root>/<app_name>`, creating it (and any parents) if missing.
    pub fn app_data_directory(&self) -> Result<PathBuf> {
        let path = self.root.join(&self.app_name);
        ensure_dir(&path)?;
        Ok(path)
    }

    /// Get `<root>/<app_name>/tmp`, creating it if missing.
    pub fn temporary_directory(&self) -> Result<PathBuf> {
        let path = self.app_data_directory()?.join(TEMP_DIR_NAME);
        ensure_dir(&path)?;
        Ok(path)
    }

    /// Get an unused path for a file named after `name` in the temporary
    /// directory.
    ///
    /// `name` is sanitized first. If a file with that name already exists a
    /// numbered sibling (`name_1.ext`, `name_2.ext`, ...) is returned. No file
    /// is created.
    pub fn temp_file_path(&self, name: &str) -> Result<PathBuf> {
        let temp_dir = self.temporary_directory()?;
        let file_name = match sanitize_filename(name) {
            n if n == "." || n == ".." => Cow::Borrowed(EMPTY_NAME_PLACEHOLDER),
            n => n,
        };
        Ok(make_unique_filename(&temp_dir.join(&*file_name)))
    }
}

/// Get the application data directory for the running program, creating it
/// if missing.
pub fn app_data_directory() -> Result<PathBuf> {
    AppDirs::from_env()?.app_data_directory()
}

/// Get the `tmp` directory inside [`app_data_directory`], creating it if
/// missing.
pub fn temporary_directory() -> Result<PathBuf> {
    AppDirs::from_env()?.temporary_directory()
}

/// Ensure a directory exists, creating it if necessary.
///
/// Parents are created as needed. Returns `true` only for the caller whose
/// `create_dir` made the final component; anyone who finds it already there,
/// including the losers of a concurrent race, gets `false`.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }

    let create_error = |source: std::io::Error| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(create_error)?;
    }

    match std::fs::create_dir(path) {
        Ok(()) => {
            info!(path = %path.display(), "Created directory");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
        Err(e) => Err(create_error(e)),
    }
}

fn user_data_root() -> Result<PathBuf> {
    let base = BaseDirs::new().ok_or(Error::NoDataRoot)?;
    let root = base.data_dir().to_path_buf();
    debug!(root = %root.display(), "Resolved user data root");
    Ok(root)
}

fn program_name() -> String {
    let from_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .filter(|name| !name.is_empty());

    match from_exe {
        Some(name) => name,
        None => {
            debug!("Could not determine executable name, using package name");
            env!("CARGO_PKG_NAME").to_string()
        }
    }
}
