//! Zone directory name parsing.

use crate::error::ThermzoneError;
use crate::Result;

/// Literal prefix of every zone directory name.
pub const ZONE_PREFIX: &str = "thermal_zone";

/// Extract the zone number from a directory name.
///
/// Returns `None` when the name is not [`ZONE_PREFIX`] followed by one or
/// more ASCII digits. Such entries (`cooling_device0`, a bare
/// `thermal_zone`, `thermal_zone1a`) are simply not zones.
///
/// Returns `Some(Err(_))` when the name has the right shape but the digits
/// do not fit a `u64`.
pub fn parse_zone_name(name: &str) -> Option<Result<u64>> {
    let digits = name.strip_prefix(ZONE_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(
        digits
            .parse::<u64>()
            .map_err(|_| ThermzoneError::InvalidZoneNumber {
                name: name.to_string(),
            }),
    )
}
