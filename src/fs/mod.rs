//! Filesystem module.
//!
//! Provides:
//! - Per-application data and temporary directory resolution
//! - Filename sanitization and manipulation

pub mod naming;
pub mod paths;

pub use naming::{
    invalid_file_name_chars, is_invalid_file_name_char, make_unique_filename,
    make_valid_file_name, sanitize_filename,
};
pub use paths::{app_data_directory, ensure_dir, temporary_directory, AppDirs};
