//! Rule-based ride receipt parser.

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::ride::RideRecord;

use super::rules::{extract_fare, extract_locations, extract_plate, extract_ride_date};

/// Result of receipt extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted ride data.
    pub record: RideRecord,
    /// Extraction warnings, one per missed field.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for receipt parsing.
///
/// Parsing is infallible: missed fields degrade to their defaults and are
/// reported as warnings.
pub trait ReceiptParser {
    /// Parse a ride record from receipt text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based parser for both known receipt layouts.
#[derive(Debug, Default, Clone, Copy)]
pub struct RideReceiptParser;

impl RideReceiptParser {
    /// Create a new receipt parser.
    pub fn new() -> Self {
        Self
    }
}

impl ReceiptParser for RideReceiptParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing receipt from {} characters of text", text.len());

        let date = extract_ride_date(text);
        if let Some(ref m) = date {
            debug!("Ride date {} from {:?}", m.value, m.source);
        } else {
            warnings.push("could not recover ride date".to_string());
        }

        let fare = extract_fare(text);
        if let Some(ref m) = fare {
            debug!("Fare total {} from {:?}", m.value, m.source);
        } else {
            warnings.push("no fare total found, defaulting to 0.00".to_string());
        }

        let plate = extract_plate(text);
        if plate.is_empty() {
            warnings.push("no license plate matched".to_string());
        }

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let locations = extract_locations(&lines);
        match locations.layout {
            Some(layout) => debug!("Locations recovered via {:?} layout", layout),
            None => warnings.push("could not recover trip locations".to_string()),
        }

        let record = RideRecord {
            date: date.map(|m| m.value),
            fare: fare.map(|m| m.value).unwrap_or(Decimal::ZERO),
            pickup: locations.pickup,
            dropoff: locations.dropoff,
            plate,
        };

        debug!(
            "Extracted record {} with {} warnings",
            record.file_stem(),
            warnings.len()
        );

        ExtractionResult {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
