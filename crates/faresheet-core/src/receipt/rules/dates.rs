//! Ride date extraction.

use chrono::NaiveDate;

use super::patterns::LONG_DATE;
use super::{ExtractionMatch, FieldExtractor};

/// Date formats tried in order: abbreviated month first, then full month.
const DATE_FORMATS: [&str; 2] = ["%b %d, %Y", "%B %d, %Y"];

/// Ride date field extractor.
pub struct RideDateExtractor;

impl RideDateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RideDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for RideDateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    /// Only the first candidate substring is considered; if it parses with
    /// neither format, the date is absent even when a later substring would
    /// have parsed.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        let m = LONG_DATE.find(text)?;
        let date = parse_long_date(m.as_str())?;

        Some(ExtractionMatch::new(date, m.as_str()).with_position(m.start(), m.end()))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        LONG_DATE
            .find_iter(text)
            .filter_map(|m| {
                parse_long_date(m.as_str())
                    .map(|date| ExtractionMatch::new(date, m.as_str()).with_position(m.start(), m.end()))
            })
            .collect()
    }
}

/// Extract the ride date from receipt text.
pub fn extract_ride_date(text: &str) -> Option<ExtractionMatch<NaiveDate>> {
    RideDateExtractor::new().extract(text)
}

fn parse_long_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
