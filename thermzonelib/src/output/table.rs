//! Fixed-width zone table.
//!
//! Every column is left-justified and padded to a fixed width. Values wider
//! than their column are written in full, pushing later columns right.

use std::io::Write;

use serde::Serialize;

use crate::zone::ThermalZone;
use crate::Result;

/// Width of the zone number column.
const NUMBER_WIDTH: usize = 3;
/// Width of the sensor type column.
const TYPE_WIDTH: usize = 15;
/// Width of the temperature column header.
const TEMP_HEADER_WIDTH: usize = 5;
/// Width of the temperature column in data rows.
const TEMP_WIDTH: usize = 8;

/// A single data row, values formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Zone number
    pub number: String,
    /// Sensor label
    #[serde(rename = "type")]
    pub kind: String,
    /// Degrees Celsius with one decimal
    pub temperature: String,
}

impl TableRow {
    /// Format a zone's values.
    pub fn from_zone(zone: &ThermalZone) -> Self {
        TableRow {
            number: zone.number().to_string(),
            kind: zone.kind().to_string(),
            temperature: format!("{:.1}", zone.celsius()),
        }
    }

    fn line(&self) -> String {
        format!(
            "{:<nw$}{:<tw$}{:<cw$}\n",
            self.number,
            self.kind,
            self.temperature,
            nw = NUMBER_WIDTH,
            tw = TYPE_WIDTH,
            cw = TEMP_WIDTH,
        )
    }
}

/// Table-ready zone data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneTable {
    /// Column headers: number, type, temperature
    pub headers: Vec<String>,
    /// One row per zone, in input order
    pub rows: Vec<TableRow>,
}

impl ZoneTable {
    /// Build a table from zones, keeping their order.
    pub fn from_zones(zones: &[ThermalZone]) -> Self {
        ZoneTable {
            headers: vec!["N".to_string(), "Type".to_string(), "Temp[C]".to_string()],
            rows: zones.iter().map(TableRow::from_zone).collect(),
        }
    }

    fn header_line(&self) -> String {
        let widths = [NUMBER_WIDTH, TYPE_WIDTH, TEMP_HEADER_WIDTH];
        let mut line: String = self
            .headers
            .iter()
            .zip(widths)
            .map(|(header, width)| format!("{:<width$}", header, width = width))
            .collect();
        line.push('\n');
        line
    }

    /// Render the header and all rows to a string.
    pub fn render(&self) -> String {
        let mut out = self.header_line();
        for row in &self.rows {
            out.push_str(&row.line());
        }
        out
    }

    /// Write the header, then each row, to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(self.header_line().as_bytes())?;
        for row in &self.rows {
            out.write_all(row.line().as_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{collect_zones, CollectOptions};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_header_only() {
        let table = ZoneTable::from_zones(&[]);
        assert_eq!(table.render(), "N  Type           Temp[C]\n");
    }

    #[test]
    fn test_rows_in_given_order() {
        let zones = vec![
            ThermalZone::new(0, "x86_pkg_temp", 55500),
            ThermalZone::new(2, "cpu-thermal", 42000),
        ];

        let expected = concat!(
            "N  Type           Temp[C]\n",
            "0  x86_pkg_temp   55.5    \n",
            "2  cpu-thermal    42.0    \n",
        );
        assert_eq!(ZoneTable::from_zones(&zones).render(), expected);
    }

    #[test]
    fn test_temperature_formatting() {
        let cases = [(45200, "45.2"), (0, "0.0"), (-5000, "-5.0"), (100000, "100.0")];
        for (milli, expected) in cases {
            let row = TableRow::from_zone(&ThermalZone::new(0, "t", milli));
            assert_eq!(row.temperature, expected, "for {milli}");
        }
    }

    #[test]
    fn test_wide_values_not_truncated() {
        let zones = vec![ThermalZone::new(1234, "a-very-long-sensor-name", 1000)];

        let rendered = ZoneTable::from_zones(&zones).render();
        let row = rendered.lines().nth(1).unwrap();
        assert_eq!(row, "1234a-very-long-sensor-name1.0     ");
    }

    #[test]
    fn test_write_to_matches_render() {
        let zones = vec![
            ThermalZone::new(0, "acpitz", 27800),
            ThermalZone::new(1, "pch_cannonlake", 44000),
        ];
        let table = ZoneTable::from_zones(&zones);

        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), table.render());
    }

    #[test]
    fn test_one_line_per_zone() {
        let zones: Vec<ThermalZone> = (0..5)
            .map(|n| ThermalZone::new(n, "zone", 1000 * n as i64))
            .collect();

        let rendered = ZoneTable::from_zones(&zones).render();
        assert_eq!(rendered.lines().count(), 6);
    }

    #[test]
    fn test_end_to_end_from_directory() {
        let dir = tempdir().unwrap();
        for (number, kind, temp) in [(2, "cpu-thermal", "42000"), (0, "x86_pkg_temp", "55500")] {
            let zone = dir.path().join(format!("thermal_zone{number}"));
            fs::create_dir(&zone).unwrap();
            fs::write(zone.join("type"), format!("{kind}\n")).unwrap();
            fs::write(zone.join("temp"), format!("{temp}\n")).unwrap();
        }
        fs::create_dir(dir.path().join("cooling_device0")).unwrap();

        let zones = collect_zones(dir.path(), CollectOptions::new()).unwrap();
        let rendered = ZoneTable::from_zones(&zones).render();

        let lines: Vec<&str> = rendered.lines().map(str::trim_end).collect();
        assert_eq!(
            lines,
            vec![
                "N  Type           Temp[C]",
                "0  x86_pkg_temp   55.5",
                "2  cpu-thermal    42.0",
            ]
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let table = ZoneTable::from_zones(&[ThermalZone::new(3, "acpitz", 27800)]);
        let json = serde_json::to_value(&table).unwrap();

        assert_eq!(json["headers"][2], "Temp[C]");
        assert_eq!(json["rows"][0]["type"], "acpitz");
        assert_eq!(json["rows"][0]["temperature"], "27.8");
    }
}
