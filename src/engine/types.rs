use crate::model::CalendarDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("date out of range: {days} days from {start}")]
    OutOfRange { start: CalendarDate, days: i64 },
}

/// Erreurs de saisie, détectées par l'appelant avant d'invoquer le moteur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a start date")]
    MissingStartDate,
    #[error("invalid start date: {0}")]
    InvalidStartDate(String),
    #[error("Please enter number of weeks")]
    MissingWeeks,
    #[error("Please enter weeks for batch calculation")]
    EmptyBatch,
    #[error("Please enter valid numbers for weeks")]
    NoValidWeeks,
}
