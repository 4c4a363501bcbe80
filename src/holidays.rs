//! Calendrier des jours fériés : chargé une fois, lecture seule ensuite.
//!
//! Le chargement consulte d'abord le cache (clé [`CACHE_KEY`]) ; en cas
//! d'absence ou d'erreur il reconstruit la table de référence intégrée puis
//! tente de la réécrire dans le cache. Aucune de ces erreurs ne remonte.

use crate::model::CalendarDate;
use crate::storage::HolidayCache;
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

/// Clé fixe sous laquelle la liste est mise en cache.
pub const CACHE_KEY: &str = "holidaysData";

/// Table de référence : jours fériés fédéraux US 2024-2026 et fêtes
/// courantes, une entrée explicite par année (pas de règle de récurrence).
pub const REFERENCE_HOLIDAYS: &[(&str, &str)] = &[
    ("2024-01-01", "New Year's Day"),
    ("2024-01-15", "Martin Luther King Jr. Day"),
    ("2024-02-19", "Presidents' Day"),
    ("2024-05-27", "Memorial Day"),
    ("2024-07-04", "Independence Day"),
    ("2024-09-02", "Labor Day"),
    ("2024-10-14", "Columbus Day"),
    ("2024-11-11", "Veterans Day"),
    ("2024-11-28", "Thanksgiving Day"),
    ("2024-12-25", "Christmas Day"),
    ("2025-01-01", "New Year's Day"),
    ("2025-01-20", "Martin Luther King Jr. Day"),
    ("2025-02-17", "Presidents' Day"),
    ("2025-05-26", "Memorial Day"),
    ("2025-07-04", "Independence Day"),
    ("2025-09-01", "Labor Day"),
    ("2025-10-13", "Columbus Day"),
    ("2025-11-11", "Veterans Day"),
    ("2025-11-27", "Thanksgiving Day"),
    ("2025-12-25", "Christmas Day"),
    ("2026-01-01", "New Year's Day"),
    ("2026-01-19", "Martin Luther King Jr. Day"),
    ("2026-02-16", "Presidents' Day"),
    ("2026-05-25", "Memorial Day"),
    ("2026-07-04", "Independence Day"),
    ("2026-09-07", "Labor Day"),
    ("2026-10-12", "Columbus Day"),
    ("2026-11-11", "Veterans Day"),
    ("2026-11-26", "Thanksgiving Day"),
    ("2026-12-25", "Christmas Day"),
    ("2024-02-14", "Valentine's Day"),
    ("2024-03-17", "St. Patrick's Day"),
    ("2024-04-01", "April Fool's Day"),
    ("2024-05-12", "Mother's Day"),
    ("2024-06-16", "Father's Day"),
    ("2024-07-04", "Independence Day (Observed)"),
    ("2024-10-31", "Halloween"),
    ("2024-11-01", "All Saints' Day"),
    ("2024-12-24", "Christmas Eve"),
    ("2024-12-31", "New Year's Eve"),
    ("2025-02-14", "Valentine's Day"),
    ("2025-03-17", "St. Patrick's Day"),
    ("2025-04-01", "April Fool's Day"),
    ("2025-05-11", "Mother's Day"),
    ("2025-06-15", "Father's Day"),
    ("2025-10-31", "Halloween"),
    ("2025-12-24", "Christmas Eve"),
    ("2025-12-31", "New Year's Eve"),
    ("2026-02-14", "Valentine's Day"),
    ("2026-03-17", "St. Patrick's Day"),
    ("2026-04-01", "April Fool's Day"),
    ("2026-05-10", "Mother's Day"),
    ("2026-06-15", "Father's Day"),
    ("2026-10-31", "Halloween"),
    ("2026-12-24", "Christmas Eve"),
    ("2026-12-31", "New Year's Eve"),
];

/// D'où vient le contenu du calendrier chargé.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidaySource {
    Cache,
    Reference,
    Custom,
}

/// Ensemble immuable de dates non ouvrées.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    dates: HashSet<CalendarDate>,
    source: HolidaySource,
}

impl HolidayCalendar {
    /// Calendrier construit à partir de dates explicites.
    pub fn from_dates<I: IntoIterator<Item = CalendarDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
            source: HolidaySource::Custom,
        }
    }

    /// Calendrier vide (aucun jour férié).
    pub fn empty() -> Self {
        Self::from_dates(std::iter::empty())
    }

    /// Table de référence intégrée.
    pub fn reference() -> Self {
        Self {
            dates: reference_dates().into_iter().collect(),
            source: HolidaySource::Reference,
        }
    }

    /// Chargement unique : cache, sinon table de référence ré-écrite dans le cache.
    pub fn load(cache: &dyn HolidayCache) -> Self {
        match read_cached(cache) {
            Ok(Some(dates)) => {
                #[cfg(feature = "logging")]
                tracing::debug!(count = dates.len(), "holidays loaded from cache");
                return Self {
                    dates: dates.into_iter().collect(),
                    source: HolidaySource::Cache,
                };
            }
            Ok(None) => {
                #[cfg(feature = "logging")]
                tracing::debug!("holiday cache miss");
            }
            Err(_err) => {
                #[cfg(feature = "logging")]
                tracing::warn!(error = %_err, "could not load cached holidays data");
            }
        }

        let dates = reference_dates();
        if let Err(_err) = write_cached(cache, &dates) {
            #[cfg(feature = "logging")]
            tracing::warn!(error = %_err, "could not cache holidays data");
        }
        Self {
            dates: dates.into_iter().collect(),
            source: HolidaySource::Reference,
        }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn source(&self) -> HolidaySource {
        self.source
    }

    /// Dates triées, filtrées éventuellement sur une année.
    pub fn sorted_dates(&self, year: Option<i32>) -> Vec<CalendarDate> {
        let mut out: Vec<CalendarDate> = self
            .dates
            .iter()
            .copied()
            .filter(|d| year.map_or(true, |y| d.year() == y))
            .collect();
        out.sort();
        out
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::reference()
    }
}

/// Libellé(s) de la table de référence pour une date donnée.
pub fn reference_name(date: CalendarDate) -> Option<String> {
    let names: Vec<&str> = REFERENCE_HOLIDAYS
        .iter()
        .filter(|(raw, _)| parse_iso(raw) == Some(date))
        .map(|(_, name)| *name)
        .collect();
    if names.is_empty() {
        None
    } else {
        Some(names.join(" / "))
    }
}

fn reference_dates() -> Vec<CalendarDate> {
    REFERENCE_HOLIDAYS
        .iter()
        .filter_map(|(raw, _)| parse_iso(raw))
        .collect()
}

fn parse_iso(raw: &str) -> Option<CalendarDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn read_cached(cache: &dyn HolidayCache) -> anyhow::Result<Option<Vec<CalendarDate>>> {
    let Some(raw) = cache.get(CACHE_KEY)? else {
        return Ok(None);
    };
    let entries: Vec<String> = serde_json::from_str(&raw)?;
    let dates = entries
        .iter()
        .map(|s| {
            parse_iso(s).ok_or_else(|| anyhow::anyhow!("invalid cached holiday date: {s}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Some(dates))
}

fn write_cached(cache: &dyn HolidayCache, dates: &[CalendarDate]) -> anyhow::Result<()> {
    let entries: Vec<String> = dates
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect();
    let json = serde_json::to_string(&entries)?;
    cache.set(CACHE_KEY, &json)
}
