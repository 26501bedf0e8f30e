//! Mana Reader - MTG decklist analysis
//!
//! Resolves a plain-text decklist against Scryfall, then reports the deck's
//! color identity distribution and mana curve over its nonland cards.

pub mod analysis;
pub mod app;
pub mod charts;
pub mod decklist;
pub mod error;
pub mod formatters;
pub mod models;
pub mod scryfall;

// Re-export commonly used items
pub use analysis::{split_lands, ColorTally, CostTally, DeckAnalysis};
pub use app::{run, RunOutcome};
pub use charts::{show_charts, ChartData};
pub use decklist::{parse_line, read_decklist, DeckLoader, MIN_REQUEST_DELAY};
pub use error::{AppError, CatalogError, DecklistError};
pub use formatters::format_report;
pub use models::{CardRecord, ColorBucket, DeckEntry};
pub use scryfall::{CardCatalog, ScryfallCard, ScryfallClient};
