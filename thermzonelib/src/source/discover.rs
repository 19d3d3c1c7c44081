//! Zone discovery in a sysfs-style thermal directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::ThermzoneError;
use crate::source::name::parse_zone_name;
use crate::Result;

/// A zone directory found during discovery, before its files are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneEntry {
    /// Number taken from the directory name
    pub number: u64,
    /// Path of the zone directory
    pub path: PathBuf,
}

/// List the zone directories directly under `base`.
///
/// Only the immediate children are examined. Entries whose names do not
/// match `thermal_zone<digits>` are skipped. The returned entries are in
/// directory order, which is unspecified; callers sort the loaded zones.
pub fn discover_zones(base: impl AsRef<Path>) -> Result<Vec<ZoneEntry>> {
    let base = base.as_ref();

    let metadata = fs::metadata(base).map_err(|source| ThermzoneError::BaseDirUnreadable {
        path: base.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ThermzoneError::NotADirectory(base.to_path_buf()));
    }

    let mut entries = Vec::new();

    for entry in WalkDir::new(base).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ThermzoneError::BaseDirUnreadable {
            path: base.to_path_buf(),
            source: e.into(),
        })?;

        let Some(name) = entry.file_name().to_str() else {
            trace!("skipping non-UTF-8 entry {:?}", entry.path());
            continue;
        };

        match parse_zone_name(name) {
            Some(number) => {
                let number = number?;
                debug!("found thermal zone {} at {}", number, entry.path().display());
                entries.push(ZoneEntry {
                    number,
                    path: entry.into_path(),
                });
            }
            None => trace!("skipping {}", name),
        }
    }

    Ok(entries)
}
