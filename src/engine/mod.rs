mod advance;
mod batch;
mod types;

pub use advance::{is_weekend, BusinessDayAdvancer};
pub use batch::{parse_week_lines, parse_weeks, BatchProcessor, QUICK_LINK_WEEKS};
pub use types::{EngineError, InputError};

use crate::countdown;
use crate::holidays::HolidayCalendar;
use crate::model::{CalculationResult, CalendarDate, ExclusionPolicy, WeekRequest};
use chrono::Days;
use std::sync::Arc;

/// Moteur sans état : convertit un nombre de semaines en date cible.
///
/// Le calendrier des jours fériés est fourni à la construction et n'est
/// jamais modifié ensuite ; le moteur se clone à moindre coût.
#[derive(Debug, Clone)]
pub struct WeekOffsetEngine {
    calendar: Arc<HolidayCalendar>,
}

impl WeekOffsetEngine {
    pub fn new(calendar: HolidayCalendar) -> Self {
        Self {
            calendar: Arc::new(calendar),
        }
    }

    pub fn with_shared(calendar: Arc<HolidayCalendar>) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    pub fn advancer(&self, policy: ExclusionPolicy) -> BusinessDayAdvancer<'_> {
        BusinessDayAdvancer::new(&self.calendar, policy)
    }

    /// Date cible : addition plate si aucune exclusion, sinon parcours jour ouvré.
    pub fn compute(&self, request: &WeekRequest) -> Result<CalendarDate, EngineError> {
        let out_of_range = || EngineError::OutOfRange {
            start: request.start,
            days: request.weeks.saturating_mul(7),
        };
        let days = request.days_to_cover().ok_or_else(out_of_range)?;

        if request.policy.is_flat() {
            return flat_add(request.start, days).ok_or_else(out_of_range);
        }
        self.advancer(request.policy).advance(request.start, days)
    }

    /// Date cible + décompte lisible.
    pub fn calculate(&self, request: &WeekRequest) -> Result<CalculationResult, EngineError> {
        let target_date = self.compute(request)?;
        Ok(CalculationResult {
            weeks: request.weeks,
            target_date,
            countdown: countdown::describe(request.start, target_date),
        })
    }
}

impl Default for WeekOffsetEngine {
    fn default() -> Self {
        Self::new(HolidayCalendar::reference())
    }
}

fn flat_add(start: CalendarDate, days: i64) -> Option<CalendarDate> {
    let span = Days::new(days.unsigned_abs());
    if days >= 0 {
        start.checked_add_days(span)
    } else {
        start.checked_sub_days(span)
    }
}
