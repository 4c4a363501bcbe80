use crate::model::{CalendarDate, DateLayout};
use chrono::Datelike;

pub fn format_date(date: CalendarDate, layout: DateLayout) -> String {
    let (year, month, day) = (date.year(), date.month(), date.day());
    match layout {
        DateLayout::Mdy => format!("{month:02}/{day:02}/{year:04}"),
        DateLayout::Dmy => format!("{day:02}/{month:02}/{year:04}"),
        DateLayout::Iso => format!("{year:04}-{month:02}-{day:02}"),
    }
}

/// Variante acceptant le sélecteur brut ; inconnu => MM/DD/YYYY.
pub fn format_with_selector(date: CalendarDate, selector: &str) -> String {
    format_date(date, DateLayout::from_selector(selector))
}

/// Texte de partage d'un résultat.
pub fn share_text(formatted_date: &str) -> String {
    format!("{formatted_date} - calculated using Weeks From Today Calculator")
}

/// Titre d'un élément de lot.
pub fn batch_heading(weeks: i64) -> String {
    format!("{weeks} Weeks From Today")
}

/// Identifiant de page d'un raccourci (`4-weeks-from-today`).
pub fn quick_link_slug(weeks: i64) -> String {
    format!("{weeks}-weeks-from-today")
}
