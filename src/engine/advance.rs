use super::EngineError;
use crate::holidays::HolidayCalendar;
use crate::model::{CalendarDate, ExclusionPolicy};
use chrono::{Datelike, Weekday};

/// Avance jour par jour en ne comptant que les jours retenus par la politique.
#[derive(Debug, Clone, Copy)]
pub struct BusinessDayAdvancer<'a> {
    calendar: &'a HolidayCalendar,
    policy: ExclusionPolicy,
}

impl<'a> BusinessDayAdvancer<'a> {
    pub fn new(calendar: &'a HolidayCalendar, policy: ExclusionPolicy) -> Self {
        Self { calendar, policy }
    }

    pub fn policy(&self) -> ExclusionPolicy {
        self.policy
    }

    /// Un jour compte sauf s'il est exclu (week-end ou férié selon les drapeaux).
    pub fn is_business_day(&self, date: CalendarDate) -> bool {
        if self.policy.exclude_weekends && is_weekend(date) {
            return false;
        }
        if self.policy.exclude_holidays && self.calendar.contains(date) {
            return false;
        }
        true
    }

    /// Parcourt les jours à partir de `start` (exclu) jusqu'à avoir compté
    /// `days_to_cover` jours ouvrés, puis renvoie le curseur.
    ///
    /// `0` renvoie `start` ; une valeur négative parcourt vers le passé.
    pub fn advance(
        &self,
        start: CalendarDate,
        days_to_cover: i64,
    ) -> Result<CalendarDate, EngineError> {
        let forward = days_to_cover >= 0;
        let target = days_to_cover.unsigned_abs();
        let mut cursor = start;
        let mut counted = 0u64;

        while counted < target {
            cursor = step(cursor, forward).ok_or(EngineError::OutOfRange {
                start,
                days: days_to_cover,
            })?;
            if self.is_business_day(cursor) {
                counted += 1;
            }
        }
        Ok(cursor)
    }

    /// Nombre de jours ouvrés dans `(from, to]`, négatif si `to < from`.
    pub fn business_days_between(&self, from: CalendarDate, to: CalendarDate) -> i64 {
        if from == to {
            return 0;
        }
        let (sign, lo, hi) = if to > from { (1, from, to) } else { (-1, to, from) };
        let count = lo
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= hi)
            .filter(|d| self.is_business_day(*d))
            .count() as i64;
        sign * count
    }
}

pub fn is_weekend(date: CalendarDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn step(date: CalendarDate, forward: bool) -> Option<CalendarDate> {
    if forward {
        date.succ_opt()
    } else {
        date.pred_opt()
    }
}
