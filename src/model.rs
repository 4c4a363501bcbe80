use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date calendaire locale, sans heure.
pub type CalendarDate = NaiveDate;

/// Politique d'exclusion : deux drapeaux indépendants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExclusionPolicy {
    pub exclude_weekends: bool,
    pub exclude_holidays: bool,
}

impl ExclusionPolicy {
    pub fn new(exclude_weekends: bool, exclude_holidays: bool) -> Self {
        Self {
            exclude_weekends,
            exclude_holidays,
        }
    }

    /// Aucun drapeau : addition calendaire plate (`weeks * 7` jours).
    pub fn is_flat(&self) -> bool {
        !self.exclude_weekends && !self.exclude_holidays
    }
}

/// Demande de calcul : date de départ + nombre de semaines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRequest {
    pub start: CalendarDate,
    pub weeks: i64,
    pub policy: ExclusionPolicy,
}

impl WeekRequest {
    pub fn new(start: CalendarDate, weeks: i64, policy: ExclusionPolicy) -> Self {
        Self {
            start,
            weeks,
            policy,
        }
    }

    /// Nombre de jours à couvrir (`weeks * 7`), `None` en cas de débordement.
    pub fn days_to_cover(&self) -> Option<i64> {
        self.weeks.checked_mul(7)
    }
}

/// Résultat d'un calcul unitaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    pub weeks: i64,
    pub target_date: CalendarDate,
    pub countdown: String,
}

/// Résultats d'un lot : même date de départ, même politique, ordre d'entrée conservé.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub start: CalendarDate,
    pub policy: ExclusionPolicy,
    pub results: Vec<CalculationResult>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn weeks(&self) -> Vec<i64> {
        self.results.iter().map(|r| r.weeks).collect()
    }
}

/// Mise en page d'une date affichée.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateLayout {
    #[default]
    Mdy,
    Dmy,
    Iso,
}

impl DateLayout {
    /// Interprète le sélecteur de format ; tout sélecteur inconnu retombe sur MDY.
    pub fn from_selector(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "MM/DD/YYYY" | "MDY" => DateLayout::Mdy,
            "DD/MM/YYYY" | "DMY" => DateLayout::Dmy,
            "YYYY-MM-DD" | "ISO" => DateLayout::Iso,
            _ => DateLayout::Mdy,
        }
    }

    /// Sélecteur tel qu'il apparaît dans les exports (`dateFormat`).
    pub fn selector(&self) -> &'static str {
        match self {
            DateLayout::Mdy => "MM/DD/YYYY",
            DateLayout::Dmy => "DD/MM/YYYY",
            DateLayout::Iso => "YYYY-MM-DD",
        }
    }
}

impl fmt::Display for DateLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}
