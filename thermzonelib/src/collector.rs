//! High-level zone collection API.
//!
//! This module provides the main entry point: scan a thermal directory, load
//! every zone and return them sorted by zone number.

use std::path::Path;

use tracing::{debug, warn};

use crate::source::discover_zones;
use crate::zone::ThermalZone;
use crate::Result;

/// What to do when a zone directory lacks its `temp` or `type` file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingFilePolicy {
    /// Fail the whole collection
    #[default]
    Abort,
    /// Drop the zone, log a warning and continue
    Skip,
}

/// Options for collecting zones.
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Handling of zones with absent files
    pub missing_files: MissingFilePolicy,
}

impl CollectOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing-file policy.
    pub fn missing_files(mut self, policy: MissingFilePolicy) -> Self {
        self.missing_files = policy;
        self
    }
}

/// Collect a snapshot of every thermal zone under `base`.
///
/// This:
/// 1. Lists `base` and keeps the `thermal_zone<N>` entries
/// 2. Reads each zone's `temp` and `type` files
/// 3. Sorts the zones by ascending number
///
/// Malformed content and unreadable files are always fatal. Absent files are
/// governed by [`CollectOptions::missing_files`].
///
/// # Example
///
/// ```rust,ignore
/// use thermzonelib::{collect_zones, CollectOptions, MissingFilePolicy};
///
/// let zones = collect_zones("/sys/devices/virtual/thermal", CollectOptions::new())?;
///
/// // Tolerate half-initialized zones
/// let zones = collect_zones(
///     "/sys/devices/virtual/thermal",
///     CollectOptions::new().missing_files(MissingFilePolicy::Skip),
/// )?;
/// ```
pub fn collect_zones(base: impl AsRef<Path>, options: CollectOptions) -> Result<Vec<ThermalZone>> {
    let entries = discover_zones(base)?;

    let mut zones = Vec::with_capacity(entries.len());

    for entry in &entries {
        match ThermalZone::load(entry) {
            Ok(zone) => {
                debug!(
                    "zone {}: {} {}",
                    zone.number(),
                    zone.kind(),
                    zone.temperature()
                );
                zones.push(zone);
            }
            Err(err)
                if err.is_missing_file() && options.missing_files == MissingFilePolicy::Skip =>
            {
                warn!("skipping thermal zone {}: {}", entry.number, err);
            }
            Err(err) => return Err(err),
        }
    }

    zones.sort();
    Ok(zones)
}
