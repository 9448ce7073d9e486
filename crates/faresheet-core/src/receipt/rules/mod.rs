//! Rule-based field extractors for ride receipts.

pub mod dates;
pub mod fare;
pub mod locations;
pub mod patterns;
pub mod plate;

pub use dates::{extract_ride_date, RideDateExtractor};
pub use fare::{extract_fare, parse_fare_amount, FareExtractor};
pub use locations::{extract_locations, LayoutKind, TripLocations};
pub use patterns::*;
pub use plate::{extract_plate, normalize_plate_line, PlateExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A single extracted value together with where it came from.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
