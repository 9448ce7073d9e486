//! Ride record data model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured fields recovered from one ride receipt.
///
/// Every field is independently defaultable: extraction degrades
/// field-by-field and never fails the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RideRecord {
    /// Ride date, absent when no parseable date was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Total fare; zero when no fare total was found.
    pub fare: Decimal,

    /// Pickup location, possibly empty.
    pub pickup: String,

    /// Drop location, possibly empty.
    pub dropoff: String,

    /// Normalized vehicle license plate, possibly empty.
    pub plate: String,
}

impl RideRecord {
    /// Derive the destination file stem: `YYYYMMDD_<fare>` with the fare
    /// rendered to two decimal places, or `UnknownDate_<fare>` when the
    /// date was not recovered.
    pub fn file_stem(&self) -> String {
        match self.date {
            Some(date) => format!("{}_{:.2}", date.format("%Y%m%d"), self.fare),
            None => format!("UnknownDate_{:.2}", self.fare),
        }
    }
}
