//! Filename sanitization and manipulation.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::debug;

/// Returned when sanitization would otherwise produce an empty name.
pub const EMPTY_NAME_PLACEHOLDER: &str = "_";

/// Replacement used by [`sanitize_filename`].
pub const DEFAULT_REPLACEMENT: char = '_';

const FANCY_DOUBLE_QUOTE: char = '\u{201D}'; // ”
const FANCY_SINGLE_QUOTE: char = '\u{2019}'; // ’
const FANCY_SLASH: char = '\u{2044}'; // ⁄

/// Characters that may not appear in a file name component.
///
/// The same set is used on every host: the Windows reserved characters (a
/// superset of the Unix `/` and NUL) plus the apostrophe. Computed on first
/// use and shared for the rest of the process.
pub fn invalid_file_name_chars() -> &'static [char] {
    static INVALID_CHARS: OnceLock<Vec<char>> = OnceLock::new();

    INVALID_CHARS.get_or_init(|| {
        let mut chars = vec!['"', '<', '>', '|', '\0'];
        chars.extend((1u8..32).map(char::from));
        chars.extend([':', '*', '?', '\\', '/', '\'']);
        chars
    })
}

/// Whether `c` is forbidden in a file name component.
pub fn is_invalid_file_name_char(c: char) -> bool {
    invalid_file_name_chars().contains(&c)
}

fn fancy_substitute(c: char) -> Option<char> {
    match c {
        '"' => Some(FANCY_DOUBLE_QUOTE),
        '\'' => Some(FANCY_SINGLE_QUOTE),
        '/' => Some(FANCY_SLASH),
        _ => None,
    }
}

/// Replace characters in `text` that are not allowed in file names.
///
/// Each forbidden character becomes `replacement`, or is dropped when
/// `replacement` is `None`. With `fancy` set, `"`, `'` and `/` always map to
/// `”`, `’` and `⁄` instead, whatever `replacement` is. A `replacement` that is
/// itself forbidden is treated as `None`.
///
/// Returns `text` borrowed as-is when nothing needed replacing, and `"_"` when
/// the result would otherwise be empty.
pub fn make_valid_file_name(text: &str, replacement: Option<char>, fancy: bool) -> Cow<'_, str> {
    let replacement = replacement.filter(|&r| !is_invalid_file_name_char(r));

    let mut sanitized = String::with_capacity(text.len());
    let mut changed = false;

    for c in text.chars() {
        if !is_invalid_file_name_char(c) {
            sanitized.push(c);
            continue;
        }

        changed = true;
        let substitute = if fancy {
            fancy_substitute(c).or(replacement)
        } else {
            replacement
        };
        if let Some(substitute) = substitute {
            sanitized.push(substitute);
        }
    }

    if sanitized.is_empty() {
        Cow::Borrowed(EMPTY_NAME_PLACEHOLDER)
    } else if changed {
        Cow::Owned(sanitized)
    } else {
        Cow::Borrowed(text)
    }
}

/// Sanitize a filename with the default settings: `_` replacement, fancy
/// quotes and slashes.
pub fn sanitize_filename(text: &str) -> Cow<'_, str> {
    make_valid_file_name(text, Some(DEFAULT_REPLACEMENT), true)
}

/// Get the first path that does not exist yet among `path`, `stem_1.ext`,
/// `stem_2.ext`, ...
///
/// Probing never gives up, so the returned path was free when checked.
pub fn make_unique_filename(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let parent = path.parent().unwrap_or(Path::new("."));
    let stem = path.file_stem().unwrap_or_default();
    let ext = path.extension();

    let mut counter: u64 = 1;
    loop {
        let candidate = parent.join(numbered_file_name(stem, counter, ext));
        if !candidate.exists() {
            debug!(path = %candidate.display(), attempts = counter, "Picked unused file name");
            return candidate;
        }
        counter += 1;
    }
}

fn numbered_file_name(stem: &OsStr, counter: u64, ext: Option<&OsStr>) -> OsString {
    let mut name = stem.to_os_string();
    name.push(format!("_{}", counter));
    if let Some(ext) = ext {
        name.push(".");
        name.push(ext);
    }
    name
}
