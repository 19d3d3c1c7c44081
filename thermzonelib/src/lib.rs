//! # thermzonelib
//!
//! A snapshot reader for the thermal zones Linux exposes under
//! `/sys/devices/virtual/thermal`.
//!
//! ## Overview
//!
//! Each zone lives in a `thermal_zoneN` directory holding (among others) a
//! `type` file with a short sensor label and a `temp` file with the current
//! reading in milli-degrees Celsius. This library:
//!
//! - **Discovers** zone directories by name (`thermal_zone` + digits)
//! - **Loads** the label and reading of every zone once
//! - **Sorts** the zones by their number
//! - **Renders** them as a fixed-width table
//!
//! All operations take the base directory as an argument, so any tree with the
//! sysfs layout can be read.
//!
//! ## Example
//!
//! ```rust
//! use thermzonelib::{collect_zones, CollectOptions, ZoneTable};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let zone = dir.path().join("thermal_zone0");
//! fs::create_dir(&zone).unwrap();
//! fs::write(zone.join("type"), "x86_pkg_temp\n").unwrap();
//! fs::write(zone.join("temp"), "55500\n").unwrap();
//!
//! let zones = collect_zones(dir.path(), CollectOptions::new()).unwrap();
//! assert_eq!(zones[0].celsius(), 55.5);
//!
//! let table = ZoneTable::from_zones(&zones);
//! assert!(table.render().starts_with("N  Type           Temp[C]\n"));
//! ```

pub mod collector;
pub mod error;
pub mod output;
pub mod source;
pub mod zone;

pub use collector::{collect_zones, CollectOptions, MissingFilePolicy};
pub use error::ThermzoneError;
pub use output::{TableRow, ZoneTable};
pub use source::{discover_zones, parse_zone_name, ZoneEntry};
pub use zone::ThermalZone;

/// Default sysfs directory holding the `thermal_zoneN` entries.
pub const THERMAL_BASE_DIR: &str = "/sys/devices/virtual/thermal";

/// Result type for thermzonelib operations
pub type Result<T> = std::result::Result<T, ThermzoneError>;
