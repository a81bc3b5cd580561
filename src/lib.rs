//! appdata-helper - per-application directories and safe file names.
//!
//! # Features
//!
//! - Resolve `<user data dir>/<app name>/` and its `tmp/` child, creating
//!   them on demand
//! - Turn arbitrary text into a single valid file name component, with
//!   optional look-alike Unicode substitutes for quotes and slashes
//! - Optional TOML configuration to override the data root and app name
//!
//! # Example
//!
//! ```no_run
//! use appdata_helper::{make_valid_file_name, temporary_directory};
//!
//! fn main() -> appdata_helper::Result<()> {
//!     let temp = temporary_directory()?;
//!     let name = make_valid_file_name("Q1: \"final\"/draft", Some('_'), true);
//!     std::fs::write(temp.join(&*name), b"...")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fs;

// Re-exports for convenience
pub use config::LocatorConfig;
pub use error::{Error, Result};
pub use fs::{
    app_data_directory, make_valid_file_name, sanitize_filename, temporary_directory, AppDirs,
};
