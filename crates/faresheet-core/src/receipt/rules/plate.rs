//! Vehicle license plate extraction.

use super::patterns::PLATE_PATTERN;
use super::{ExtractionMatch, FieldExtractor};

/// License plate field extractor.
///
/// Plates are printed with varying punctuation and casing ("KA 05 MM 1234",
/// "ka-05-mm-1234"), so each line is reduced to its uppercased alphanumeric
/// characters before the fixed plate shape is matched.
pub struct PlateExtractor;

impl PlateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PlateExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| {
                let normalized = normalize_plate_line(line);
                PLATE_PATTERN
                    .find(&normalized)
                    .map(|m| ExtractionMatch::new(m.as_str().to_string(), line))
            })
            .collect()
    }
}

/// Extract the first vehicle plate found across the receipt lines, or an
/// empty string when none matches.
pub fn extract_plate(text: &str) -> String {
    PlateExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_default()
}

/// Strip non-alphanumeric characters and uppercase the rest.
pub fn normalize_plate_line(line: &str) -> String {
    line.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_uppercase()
}
