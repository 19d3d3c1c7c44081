//! Output formatting: present zones as a table.
//!
//! This module handles the last stage of the pipeline - turning sorted zones
//! into fixed-width text. It provides:
//!
//! - **ZoneTable**: Table-ready data with headers and preformatted rows
//! - **TableRow**: One zone with its cells already formatted
//!
//! ZoneTable does no sorting or filtering; it renders zones in the order given.
//!
//! ## Example
//!
//! ```rust,ignore
//! use thermzonelib::output::ZoneTable;
//!
//! let table = ZoneTable::from_zones(&zones);
//! // table.headers: ["N", "Type", "Temp[C]"]
//! // table.rows: [TableRow { number: "0", kind: "x86_pkg_temp", temperature: "55.5" }]
//! print!("{}", table.render());
//! ```

pub mod table;

pub use table::{TableRow, ZoneTable};
