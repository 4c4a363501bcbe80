//! Préparation des entrées côté appelant : le moteur ne reçoit que des
//! valeurs déjà validées.

use crate::engine::{parse_week_lines, parse_weeks, InputError};
use crate::model::CalendarDate;
use chrono::{Local, NaiveDate};

/// Date de départ `YYYY-MM-DD` ; absente ou vide => erreur de saisie.
pub fn parse_start_date(raw: Option<&str>) -> Result<CalendarDate, InputError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(InputError::MissingStartDate);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| InputError::InvalidStartDate(raw.to_string()))
}

/// Date du jour (calendrier local).
pub fn today() -> CalendarDate {
    Local::now().date_naive()
}

/// Nombre de semaines du mode unitaire.
pub fn single_weeks(raw: Option<&str>) -> Result<i64, InputError> {
    raw.and_then(parse_weeks).ok_or(InputError::MissingWeeks)
}

/// Liste de semaines du mode lot ; vide après filtrage => erreur de saisie.
pub fn batch_weeks(text: &str) -> Result<Vec<i64>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::EmptyBatch);
    }
    let weeks = parse_week_lines(text);
    if weeks.is_empty() {
        return Err(InputError::NoValidWeeks);
    }
    Ok(weeks)
}
