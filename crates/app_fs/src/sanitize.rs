//! File name validation for `add` and `rn`

use crate::{FsError, Result};

/// Characters no file name may contain on this platform
#[cfg(windows)]
const FORBIDDEN_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

#[cfg(not(windows))]
const FORBIDDEN_CHARS: &[char] = &['/'];

/// Windows reserved filenames
#[cfg(windows)]
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL",
    "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9",
    "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Check that `name` names a single entry inside a directory
pub fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }

    if name.chars().any(|c| FORBIDDEN_CHARS.contains(&c) || c.is_control()) {
        return false;
    }

    #[cfg(windows)]
    {
        let name_upper = name.to_uppercase();
        let base_name = name_upper.split('.').next().unwrap_or("");
        if RESERVED_NAMES.contains(&base_name) {
            return false;
        }
        if name.ends_with('.') || name.ends_with(' ') {
            return false;
        }
    }

    true
}

/// Like [`is_valid_filename`], as a `Result`
pub fn validate_filename(name: &str) -> Result<()> {
    if is_valid_filename(name) {
        Ok(())
    } else {
        Err(FsError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(is_valid_filename("normal.txt"));
        assert!(is_valid_filename("with space.txt"));
        assert!(is_valid_filename(".hidden"));
        assert!(!is_valid_filename(""));
        assert!(!is_valid_filename("."));
        assert!(!is_valid_filename(".."));
        assert!(!is_valid_filename("dir/file.txt"));
        assert!(!is_valid_filename("bell\u{7}"));
    }

    #[test]
    fn test_validate_reports_name() {
        match validate_filename("a/b") {
            Err(FsError::InvalidName(name)) => assert_eq!(name, "a/b"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
