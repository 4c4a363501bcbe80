use crate::model::CalendarDate;
use std::fmt;

/// Sens du décompte par rapport à la date de départ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    FromStart,
    BeforeStart,
}

/// Écart absolu décomposé en semaines et jours restants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub weeks: i64,
    pub days: i64,
    pub direction: Direction,
}

impl Countdown {
    /// Une cible égale à la référence est rendue « before ».
    pub fn between(reference: CalendarDate, target: CalendarDate) -> Self {
        let total = target.signed_duration_since(reference).num_days().abs();
        let direction = if target > reference {
            Direction::FromStart
        } else {
            Direction::BeforeStart
        };
        Self {
            weeks: total / 7,
            days: total % 7,
            direction,
        }
    }

    pub fn total_days(&self) -> i64 {
        self.weeks * 7 + self.days
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.direction {
            Direction::FromStart => "from start date",
            Direction::BeforeStart => "before start date",
        };
        write!(f, "{} weeks and {} days {}", self.weeks, self.days, suffix)
    }
}

pub fn describe(reference: CalendarDate, target: CalendarDate) -> String {
    Countdown::between(reference, target).to_string()
}
