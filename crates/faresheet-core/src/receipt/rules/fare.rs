//! Fare amount extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::FARE_TOTAL;
use super::{ExtractionMatch, FieldExtractor};

/// Fare total field extractor.
pub struct FareExtractor;

impl FareExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FareExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for FareExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        FARE_TOTAL
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0).unwrap();
                parse_fare_amount(&caps[1]).map(|amount| {
                    ExtractionMatch::new(amount, full_match.as_str())
                        .with_position(full_match.start(), full_match.end())
                })
            })
            .collect()
    }
}

/// Extract the fare total from receipt text.
pub fn extract_fare(text: &str) -> Option<ExtractionMatch<Decimal>> {
    FareExtractor::new().extract(text)
}

/// Parse a rupee amount with thousands separators (e.g. "12,345.67").
pub fn parse_fare_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(&s.replace(',', "")).ok()
}
