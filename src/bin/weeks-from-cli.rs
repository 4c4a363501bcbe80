#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use weeks_from::{
    engine::QUICK_LINK_WEEKS,
    export::{export_batch_csv, write_export, ExportDocument},
    format::{batch_heading, format_date, quick_link_slug, share_text},
    holidays::{reference_name, HolidayCalendar},
    input,
    model::{BatchResult, CalendarDate, DateLayout, ExclusionPolicy, WeekRequest},
    storage::{FileCache, HolidayCache, NoCache},
    WeekOffsetEngine,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Calcule la date N semaines après une date de départ
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Répertoire du cache des jours fériés
    #[arg(long, global = true, default_value = ".weeks-from-cache")]
    cache: String,

    /// Ignore le cache (table de référence uniquement)
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// Date de départ YYYY-MM-DD (défaut : aujourd'hui)
    #[arg(long)]
    start: Option<String>,
    /// Ne compte pas les samedis et dimanches
    #[arg(long)]
    exclude_weekends: bool,
    /// Ne compte pas les jours fériés
    #[arg(long)]
    exclude_holidays: bool,
    /// MM/DD/YYYY, DD/MM/YYYY ou YYYY-MM-DD
    #[arg(long, default_value = "MM/DD/YYYY")]
    format: String,
}

impl CalcArgs {
    fn start_date(&self) -> Result<CalendarDate> {
        match &self.start {
            Some(raw) => Ok(input::parse_start_date(Some(raw.as_str()))?),
            None => Ok(input::today()),
        }
    }

    fn policy(&self) -> ExclusionPolicy {
        ExclusionPolicy::new(self.exclude_weekends, self.exclude_holidays)
    }

    fn layout(&self) -> DateLayout {
        DateLayout::from_selector(&self.format)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calcul unitaire
    Single {
        #[command(flatten)]
        calc: CalcArgs,
        /// Nombre de semaines
        #[arg(long, allow_hyphen_values = true)]
        weeks: Option<String>,
        /// Export JSON (fichier ou répertoire)
        #[arg(long)]
        export: Option<String>,
        /// Affiche aussi le texte de partage
        #[arg(long)]
        share: bool,
    },

    /// Calcul en lot : une valeur par ligne (fichier, sinon stdin)
    Batch {
        #[command(flatten)]
        calc: CalcArgs,
        #[arg(long)]
        file: Option<String>,
        /// Export JSON (fichier ou répertoire)
        #[arg(long)]
        export: Option<String>,
        /// Export CSV
        #[arg(long)]
        csv: Option<String>,
    },

    /// Lot sur les raccourcis usuels (1, 2, 3 … 52 semaines)
    Presets {
        #[command(flatten)]
        calc: CalcArgs,
        #[arg(long)]
        export: Option<String>,
    },

    /// Lister les jours fériés chargés
    Holidays {
        #[arg(long)]
        year: Option<i32>,
        /// Vérifie une date YYYY-MM-DD
        #[arg(long)]
        check: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let cache: Box<dyn HolidayCache> = if cli.no_cache {
        Box::new(NoCache)
    } else {
        Box::new(FileCache::open(&cli.cache))
    };
    let engine = WeekOffsetEngine::new(HolidayCalendar::load(cache.as_ref()));

    match cli.cmd {
        Commands::Single {
            calc,
            weeks,
            export,
            share,
        } => {
            let start = calc.start_date()?;
            let weeks = input::single_weeks(weeks.as_deref())?;
            let request = WeekRequest::new(start, weeks, calc.policy());
            let result = engine.calculate(&request)?;
            let formatted = format_date(result.target_date, calc.layout());
            println!("{formatted}");
            println!("{}", result.countdown);
            if share {
                println!("{}", share_text(&formatted));
            }
            if let Some(path) = export {
                let doc = ExportDocument::single_now(start, &result, calc.policy(), calc.layout());
                let written = write_export(path, &doc)?;
                eprintln!("Result exported to {}", written.display());
            }
        }
        Commands::Batch {
            calc,
            file,
            export,
            csv,
        } => {
            let start = calc.start_date()?;
            let text = read_batch_text(file.as_deref())?;
            let weeks = input::batch_weeks(&text)?;
            let batch = engine.batch().run(start, &weeks, calc.policy())?;
            print_batch(&batch, calc.layout());
            if let Some(path) = export {
                let doc = ExportDocument::batch_now(&batch, calc.layout());
                let written = write_export(path, &doc)?;
                eprintln!("Batch results exported to {}", written.display());
            }
            if let Some(path) = csv {
                export_batch_csv(&path, &batch, calc.layout())?;
            }
        }
        Commands::Presets { calc, export } => {
            let start = calc.start_date()?;
            let batch = engine.batch().run(start, &QUICK_LINK_WEEKS, calc.policy())?;
            for r in &batch.results {
                println!(
                    "{} | {} | {}",
                    quick_link_slug(r.weeks),
                    format_date(r.target_date, calc.layout()),
                    r.countdown
                );
            }
            if let Some(path) = export {
                let doc = ExportDocument::batch_now(&batch, calc.layout());
                write_export(path, &doc)?;
            }
        }
        Commands::Holidays { year, check } => {
            let calendar = engine.calendar();
            if let Some(raw) = check {
                let date = input::parse_start_date(Some(raw.as_str()))?;
                if calendar.contains(date) {
                    let name = reference_name(date).unwrap_or_else(|| "holiday".to_string());
                    println!("{date}: {name}");
                } else {
                    println!("{date}: business day");
                }
            } else {
                for date in calendar.sorted_dates(year) {
                    let name = reference_name(date).unwrap_or_default();
                    println!("{date} {name}");
                }
            }
        }
    }

    Ok(())
}

fn read_batch_text(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("reading {path}"))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading weeks from stdin")?;
            Ok(buf)
        }
    }
}

fn print_batch(batch: &BatchResult, layout: DateLayout) {
    for r in &batch.results {
        println!(
            "{} | {} | {}",
            batch_heading(r.weeks),
            format_date(r.target_date, layout),
            r.countdown
        );
    }
}
