//! Pickup/drop location extraction.
//!
//! Receipts come in two known renderings. The pipe-delimited layout puts
//! each stop on one line ("6:26 pm | 123 Main St"); the license-anchored
//! layout spreads each address over the lines following a bare time token
//! after the "License Plate" line. Layout sniffing is pattern-based, so no
//! per-provider templates are needed.

use super::patterns::{BARE_TIME, DROP_STOP_MARKERS, LICENSE_PLATE_MARKER, PIPE_STOP};

/// Which receipt layout produced the locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// One "time | address" line per stop.
    PipeDelimited,
    /// Multiline addresses anchored after the "License Plate" line.
    LicenseAnchored,
}

/// Pickup and drop locations recovered from one receipt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripLocations {
    /// Pickup location, empty when unrecovered.
    pub pickup: String,
    /// Drop location, empty when unrecovered.
    pub dropoff: String,
    /// Layout that yielded the locations, absent when neither matched.
    pub layout: Option<LayoutKind>,
}

/// Recover pickup/drop locations from the trimmed, non-empty receipt lines.
///
/// The pipe-delimited strategy is tried first; the license-anchored
/// strategy runs only when it yields fewer than two stops.
pub fn extract_locations(lines: &[&str]) -> TripLocations {
    if let Some((pickup, dropoff)) = pipe_delimited(lines) {
        return TripLocations {
            pickup,
            dropoff,
            layout: Some(LayoutKind::PipeDelimited),
        };
    }

    if let Some((pickup, dropoff)) = license_anchored(lines) {
        return TripLocations {
            pickup,
            dropoff,
            layout: Some(LayoutKind::LicenseAnchored),
        };
    }

    TripLocations::default()
}

/// Collect the address part of every "time | address" line, in document
/// order. At least two stops are required; any further matches are ignored.
fn pipe_delimited(lines: &[&str]) -> Option<(String, String)> {
    let mut stops = lines
        .iter()
        .filter_map(|line| PIPE_STOP.captures(line))
        .map(|caps| caps[2].trim().to_string());

    let pickup = stops.next()?;
    let dropoff = stops.next()?;
    Some((pickup, dropoff))
}

/// Assemble multiline addresses between the bare time tokens following the
/// "License Plate" line.
fn license_anchored(lines: &[&str]) -> Option<(String, String)> {
    let anchor = lines
        .iter()
        .position(|line| line.contains(LICENSE_PLATE_MARKER))?;

    let time_indexes: Vec<usize> = (anchor..lines.len())
        .filter(|&i| BARE_TIME.is_match(lines[i]))
        .collect();

    if time_indexes.len() < 2 {
        return None;
    }

    // The pickup block stops only at the next bare time line; the drop
    // block additionally stops at the trailing-boilerplate markers.
    let pickup = lines[time_indexes[0] + 1..time_indexes[1]].join(" ");

    let dropoff = lines[time_indexes[1] + 1..]
        .iter()
        .take_while(|line| {
            !BARE_TIME.is_match(line)
                && !DROP_STOP_MARKERS.iter().any(|marker| line.contains(marker))
        })
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    Some((pickup, dropoff))
}
