//! # thermzone
//!
//! Print the current temperature of every Linux thermal zone.
//!
//! ## Overview
//!
//! thermzone is built on top of thermzonelib. It reads each
//! `/sys/devices/virtual/thermal/thermal_zoneN` directory once and prints a
//! table sorted by zone number:
//!
//! ```text
//! N  Type           Temp[C]
//! 0  x86_pkg_temp   55.5
//! 2  cpu-thermal    42.0
//! ```
//!
//! A zone missing its `temp` or `type` file, malformed file content, or an
//! unreadable thermal directory is reported on stderr and exits non-zero.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Command;
use thermzonelib::{collect_zones, CollectOptions, ZoneTable, THERMAL_BASE_DIR};
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("thermzone")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Print a sorted table of thermal zone temperatures")
}

fn run() -> anyhow::Result<()> {
    let zones = collect_zones(THERMAL_BASE_DIR, CollectOptions::new())
        .with_context(|| format!("failed to read thermal zones from {THERMAL_BASE_DIR}"))?;

    let table = ZoneTable::from_zones(&zones);
    let mut stdout = io::stdout().lock();
    table.write_to(&mut stdout)?;
    stdout.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let _ = build_command().get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
