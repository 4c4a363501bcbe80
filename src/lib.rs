#![forbid(unsafe_code)]
//! Weeks-from — calcul d'une date N semaines après une date de départ.
//!
//! - Addition calendaire plate ou parcours en jours ouvrés.
//! - Exclusion des week-ends et/ou d'une table fixe de jours fériés.
//! - Mode unitaire et mode lot ; export JSON (et CSV pour les lots).
//! - Dates calendaires locales uniquement, sans fuseau horaire.

pub mod countdown;
pub mod engine;
pub mod export;
pub mod format;
pub mod holidays;
pub mod input;
pub mod model;
pub mod storage;

pub use countdown::{describe, Countdown, Direction};
pub use engine::{
    parse_week_lines, BatchProcessor, BusinessDayAdvancer, EngineError, InputError,
    WeekOffsetEngine, QUICK_LINK_WEEKS,
};
pub use export::{export, write_export, ExportDocument};
pub use format::{format_date, share_text};
pub use holidays::{HolidayCalendar, HolidaySource};
pub use model::{
    BatchResult, CalculationResult, CalendarDate, DateLayout, ExclusionPolicy, WeekRequest,
};
pub use storage::{FileCache, HolidayCache, MemoryCache, NoCache};
