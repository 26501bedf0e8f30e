//! One analysis run: decklist file to console report and chart window

use crate::analysis::DeckAnalysis;
use crate::charts::ChartData;
use crate::decklist::DeckLoader;
use crate::error::AppError;
use crate::formatters::format_report;
use crate::scryfall::CardCatalog;
use std::io::Write;
use std::path::Path;

/// How far a run got
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No entry resolved; nothing was printed or charted
    NoCardData,
    /// Report printed, charts turned off
    ReportOnly,
    /// Report printed, but there were no nonland cards to chart
    NothingToChart,
    /// Report printed and the charts were handed to `display`
    Charted,
}

/// Resolve `decklist`, write the report to `out` and pass the chart data to
/// `display` when there is something to draw.
pub fn run<C, W, F>(
    loader: &DeckLoader<'_, C>,
    decklist: &Path,
    show_charts: bool,
    out: &mut W,
    display: F,
) -> Result<RunOutcome, AppError>
where
    C: CardCatalog,
    W: Write,
    F: FnOnce(ChartData) -> Result<(), eframe::Error>,
{
    let records = loader.load(decklist)?;
    if records.is_empty() {
        log::warn!(
            "No card data was fetched. Please check your decklist file and internet connection."
        );
        return Ok(RunOutcome::NoCardData);
    }
    log::info!("Resolved {} decklist entries", records.len());

    let analysis = DeckAnalysis::new(&records);
    write!(out, "{}", format_report(&records, &analysis))?;
    out.flush()?;

    if !show_charts {
        return Ok(RunOutcome::ReportOnly);
    }

    let data = ChartData::from_analysis(&analysis);
    if data.is_empty() {
        log::info!("Nothing to chart: the deck has no nonland cards");
        return Ok(RunOutcome::NothingToChart);
    }

    display(data)?;
    Ok(RunOutcome::Charted)
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
