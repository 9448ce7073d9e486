//! Common regex patterns for ride receipt extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Long-month date: "Nov 5, 2024" or "November 5, 2024"
    pub static ref LONG_DATE: Regex = Regex::new(
        r"([A-Za-z]+ \d{1,2}, \d{4})"
    ).unwrap();

    // Fare total: "Total ₹1,234.56"
    pub static ref FARE_TOTAL: Regex = Regex::new(
        r"Total ₹\s*([\d,]+\.\d{2})"
    ).unwrap();

    // Vehicle plate, matched against normalized lines: 2 letters, 2 digits,
    // 1-2 letters, 4 digits
    pub static ref PLATE_PATTERN: Regex = Regex::new(
        r"[A-Z]{2}[0-9]{2}[A-Z]{1,2}[0-9]{4}"
    ).unwrap();

    // Pipe-delimited stop line: "6:26 pm | 123 Main St"
    pub static ref PIPE_STOP: Regex = Regex::new(
        r"(?i)\d{1,2}:\d{2}\s*(am|pm)\s*\|\s*(.+)"
    ).unwrap();

    // A line that is exactly a time token: "6:26 pm"
    pub static ref BARE_TIME: Regex = Regex::new(
        r"(?i)^\d{1,2}:\d{2}\s*(am|pm)$"
    ).unwrap();
}

/// Marker anchoring the license-anchored multiline layout.
pub const LICENSE_PLATE_MARKER: &str = "License Plate";

/// Markers terminating the drop-location block in the license-anchored layout.
pub const DROP_STOP_MARKERS: [&str; 3] = ["You rode with", "Want to review", "http"];
