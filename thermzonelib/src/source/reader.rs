//! Typed readers for single-value sysfs files.
//!
//! Both readers distinguish three outcomes: `Ok(Some(value))`, `Ok(None)` when
//! the file does not exist, and `Err(_)` when it exists but cannot be read or
//! parsed. Whether an absent file is fatal is left to the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ThermzoneError;
use crate::Result;

/// Read a file to a string, mapping "not found" to `None`.
fn read_contents(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ThermzoneError::FileRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read a signed integer from the first whitespace-delimited token of a file.
///
/// Used for `temp`, which holds milli-degrees Celsius.
pub fn read_temperature(path: impl AsRef<Path>) -> Result<Option<i64>> {
    let path = path.as_ref();
    let Some(contents) = read_contents(path)? else {
        return Ok(None);
    };

    contents
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<i64>().ok())
        .map(Some)
        .ok_or_else(|| ThermzoneError::InvalidTemperature {
            path: path.to_path_buf(),
            content: contents.trim().to_string(),
        })
}

/// Read the first whitespace-delimited token of a file as a label.
///
/// Used for `type`, which holds the sensor name.
pub fn read_label(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    let Some(contents) = read_contents(path)? else {
        return Ok(None);
    };

    match contents.split_whitespace().next() {
        Some(token) => Ok(Some(token.to_string())),
        None => Err(ThermzoneError::EmptyType {
            path: path.to_path_buf(),
        }),
    }
}
