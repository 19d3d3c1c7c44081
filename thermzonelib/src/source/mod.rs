//! Source discovery: find and read thermal zones on disk.
//!
//! This module handles the first stage of the pipeline - locating the zone
//! directories and reading their files. It provides:
//!
//! - **Name parsing**: Recognize `thermal_zoneN` entries and extract `N`
//! - **Zone discovery**: List the base directory and keep matching entries
//! - **File readers**: Typed readers for the `temp` and `type` files
//!
//! ## Example
//!
//! ```rust,ignore
//! use thermzonelib::source::{discover_zones, parse_zone_name};
//!
//! assert_eq!(parse_zone_name("thermal_zone7").unwrap().unwrap(), 7);
//! let entries = discover_zones("/sys/devices/virtual/thermal")?;
//! ```

pub mod discover;
pub mod name;
pub mod reader;

pub use discover::{discover_zones, ZoneEntry};
pub use name::{parse_zone_name, ZONE_PREFIX};
pub use reader::{read_label, read_temperature};
