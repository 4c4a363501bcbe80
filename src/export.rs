//! Export des résultats : JSON joliment indenté (et CSV pour les lots).
//!
//! Les noms de champs sont figés (`startDate`, `targetDate`, `calculatedAt`…)
//! car des outils en aval relisent ces fichiers.

use crate::format::format_date;
use crate::model::{BatchResult, CalculationResult, CalendarDate, DateLayout, ExclusionPolicy};
use anyhow::Context;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Export d'un calcul unitaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleExport {
    pub start_date: String,
    pub weeks: i64,
    pub target_date: String,
    pub countdown: String,
    pub exclude_weekends: bool,
    pub exclude_holidays: bool,
    #[serde(with = "iso_millis")]
    pub calculated_at: DateTime<Utc>,
}

/// Une ligne de lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportItem {
    pub weeks: i64,
    pub target_date: String,
    pub countdown: String,
}

/// Export d'un lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchExport {
    pub start_date: String,
    pub exclude_weekends: bool,
    pub exclude_holidays: bool,
    pub date_format: String,
    pub results: Vec<ExportItem>,
    #[serde(with = "iso_millis")]
    pub calculated_at: DateTime<Utc>,
}

/// Instantané écrit une fois : entrées + résultat(s) + horodatage d'export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExportDocument {
    Single(SingleExport),
    Batch(BatchExport),
}

impl ExportDocument {
    pub fn single(
        start: CalendarDate,
        result: &CalculationResult,
        policy: ExclusionPolicy,
        layout: DateLayout,
        calculated_at: DateTime<Utc>,
    ) -> Self {
        ExportDocument::Single(SingleExport {
            start_date: iso(start),
            weeks: result.weeks,
            target_date: format_date(result.target_date, layout),
            countdown: result.countdown.clone(),
            exclude_weekends: policy.exclude_weekends,
            exclude_holidays: policy.exclude_holidays,
            calculated_at,
        })
    }

    pub fn single_now(
        start: CalendarDate,
        result: &CalculationResult,
        policy: ExclusionPolicy,
        layout: DateLayout,
    ) -> Self {
        Self::single(start, result, policy, layout, Utc::now())
    }

    pub fn batch(batch: &BatchResult, layout: DateLayout, calculated_at: DateTime<Utc>) -> Self {
        let results = batch
            .results
            .iter()
            .map(|r| ExportItem {
                weeks: r.weeks,
                target_date: format_date(r.target_date, layout),
                countdown: r.countdown.clone(),
            })
            .collect();
        ExportDocument::Batch(BatchExport {
            start_date: iso(batch.start),
            exclude_weekends: batch.policy.exclude_weekends,
            exclude_holidays: batch.policy.exclude_holidays,
            date_format: layout.selector().to_string(),
            results,
            calculated_at,
        })
    }

    pub fn batch_now(batch: &BatchResult, layout: DateLayout) -> Self {
        Self::batch(batch, layout, Utc::now())
    }

    pub fn calculated_at(&self) -> DateTime<Utc> {
        match self {
            ExportDocument::Single(s) => s.calculated_at,
            ExportDocument::Batch(b) => b.calculated_at,
        }
    }

    /// Nom de fichier proposé : `weeks-calculation-<ms>.json` ou `batch-…`.
    pub fn file_name(&self) -> String {
        let millis = self.calculated_at().timestamp_millis();
        match self {
            ExportDocument::Single(_) => format!("weeks-calculation-{millis}.json"),
            ExportDocument::Batch(_) => format!("batch-weeks-calculation-{millis}.json"),
        }
    }
}

/// Sérialise le document (JSON indenté, UTF-8).
pub fn export(document: &ExportDocument) -> anyhow::Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(document)?)
}

/// Écrit le document ; si `path` est un répertoire, utilise [`ExportDocument::file_name`].
pub fn write_export<P: AsRef<Path>>(path: P, document: &ExportDocument) -> anyhow::Result<PathBuf> {
    let path = path.as_ref();
    let target = if path.is_dir() {
        path.join(document.file_name())
    } else {
        path.to_path_buf()
    };
    let bytes = export(document)?;
    fs::write(&target, bytes).with_context(|| format!("writing {}", target.display()))?;
    Ok(target)
}

/// Export CSV d'un lot : header `weeks,targetDate,countdown`.
pub fn write_batch_csv<W: std::io::Write>(
    writer: W,
    batch: &BatchResult,
    layout: DateLayout,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(writer);
    w.write_record(["weeks", "targetDate", "countdown"])?;
    for r in &batch.results {
        let weeks = r.weeks.to_string();
        let target = format_date(r.target_date, layout);
        w.write_record([weeks.as_str(), target.as_str(), r.countdown.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

pub fn export_batch_csv<P: AsRef<Path>>(
    path: P,
    batch: &BatchResult,
    layout: DateLayout,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_batch_csv(file, batch, layout)
}

fn iso(date: CalendarDate) -> String {
    format_date(date, DateLayout::Iso)
}

/// Horodatage RFC 3339 UTC à la milliseconde, suffixe `Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
