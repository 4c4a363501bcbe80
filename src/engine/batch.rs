use super::{EngineError, WeekOffsetEngine};
use crate::model::{BatchResult, CalendarDate, ExclusionPolicy, WeekRequest};

/// Raccourcis proposés pour les calculs courants.
pub const QUICK_LINK_WEEKS: [i64; 15] = [1, 2, 3, 4, 5, 6, 8, 10, 12, 16, 20, 24, 30, 40, 52];

/// Exécute le moteur sur une liste ordonnée de nombres de semaines.
#[derive(Debug, Clone, Copy)]
pub struct BatchProcessor<'a> {
    engine: &'a WeekOffsetEngine,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(engine: &'a WeekOffsetEngine) -> Self {
        Self { engine }
    }

    /// Un résultat par entrée, dans l'ordre fourni ; les doublons sont conservés.
    pub fn run(
        &self,
        start: CalendarDate,
        weeks: &[i64],
        policy: ExclusionPolicy,
    ) -> Result<BatchResult, EngineError> {
        let results = weeks
            .iter()
            .map(|&w| self.engine.calculate(&WeekRequest::new(start, w, policy)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BatchResult {
            start,
            policy,
            results,
        })
    }
}

impl WeekOffsetEngine {
    pub fn batch(&self) -> BatchProcessor<'_> {
        BatchProcessor::new(self)
    }
}

/// Découpe un texte ligne par ligne ; lignes vides et non numériques ignorées.
pub fn parse_week_lines(text: &str) -> Vec<i64> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_weeks)
        .collect()
}

/// Lecture tolérante d'un entier : signe optionnel puis chiffres, le reste
/// de la ligne est ignoré (`"4 weeks"` donne 4, `"2.5"` donne 2).
pub fn parse_weeks(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}
