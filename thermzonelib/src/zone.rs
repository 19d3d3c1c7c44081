//! The thermal zone record.

use serde::Serialize;

use crate::error::ThermzoneError;
use crate::source::reader::{read_label, read_temperature};
use crate::source::ZoneEntry;
use crate::Result;

/// File inside a zone directory holding the reading in milli-degrees Celsius.
pub const TEMP_FILE: &str = "temp";

/// File inside a zone directory holding the sensor label.
pub const TYPE_FILE: &str = "type";

/// One thermal zone as read at a single point in time.
///
/// Zones order by `number` first, so sorting a collection yields ascending
/// zone numbers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ThermalZone {
    number: u64,
    #[serde(rename = "type")]
    kind: String,
    temperature: i64,
}

impl ThermalZone {
    /// Create a zone from already-known values.
    pub fn new(number: u64, kind: impl Into<String>, temperature: i64) -> Self {
        Self {
            number,
            kind: kind.into(),
            temperature,
        }
    }

    /// Read the `temp` and `type` files of a discovered zone.
    ///
    /// An absent file yields [`ThermzoneError::MissingFile`].
    pub fn load(entry: &ZoneEntry) -> Result<Self> {
        let temp_path = entry.path.join(TEMP_FILE);
        let temperature =
            read_temperature(&temp_path)?.ok_or_else(|| ThermzoneError::MissingFile {
                zone: entry.number,
                path: temp_path.clone(),
            })?;

        let type_path = entry.path.join(TYPE_FILE);
        let kind = read_label(&type_path)?.ok_or_else(|| ThermzoneError::MissingFile {
            zone: entry.number,
            path: type_path.clone(),
        })?;

        Ok(Self::new(entry.number, kind, temperature))
    }

    /// Zone number from the directory name.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Sensor label from the `type` file.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Raw reading in milli-degrees Celsius.
    pub fn temperature(&self) -> i64 {
        self.temperature
    }

    /// Reading in degrees Celsius.
    pub fn celsius(&self) -> f64 {
        self.temperature as f64 / 1000.0
    }
}
