use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures invalid subscription records.
///
/// Validation runs at construction and again at every projection entry
/// point, so a record that slipped past its constructor fails loudly
/// instead of producing a wrong projection or an unbounded walk.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubscriptionError {
    #[error("subscription name must not be empty")]
    EmptyName,
    #[error("subscription amount must be positive, got {0}")]
    NonPositiveAmount(f64),
    #[error("end date {end} precedes reference date {reference}")]
    EndBeforeReference { reference: NaiveDate, end: NaiveDate },
}

/// Error type that captures storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
