//! Decklist reading and card resolution
//!
//! A decklist is plain text, one card per line, with an optional leading
//! quantity: `4 Lightning Bolt` or just `Lightning Bolt`.

use crate::error::DecklistError;
use crate::models::{CardRecord, DeckEntry};
use crate::scryfall::CardCatalog;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Scryfall asks clients to keep 50-100 ms between requests. Every lookup
/// is followed by at least this pause.
pub const MIN_REQUEST_DELAY: Duration = Duration::from_millis(50);

lazy_static! {
    static ref QUANTITY_PREFIX: Regex = Regex::new(r"^([0-9]+)\s+(.*)$").unwrap();
}

/// Parse one decklist line.
///
/// Returns `Ok(None)` for blank lines. A leading run of ASCII digits followed by
/// whitespace is the quantity; anything else is taken as a card name with
/// quantity 1.
pub fn parse_line(line: &str) -> Result<Option<DeckEntry>, DecklistError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let Some(caps) = QUANTITY_PREFIX.captures(line) else {
        return Ok(Some(DeckEntry {
            quantity: 1,
            name: line.to_string(),
        }));
    };

    let quantity: u32 = caps[1].parse().map_err(|_| DecklistError::MalformedLine {
        line: line.to_string(),
        reason: format!("quantity '{}' is not a valid count", &caps[1]),
    })?;
    if quantity == 0 {
        return Err(DecklistError::MalformedLine {
            line: line.to_string(),
            reason: "quantity must be at least 1".to_string(),
        });
    }

    Ok(Some(DeckEntry {
        quantity,
        name: caps[2].trim().to_string(),
    }))
}

/// Read all entries from a decklist file, in file order.
///
/// Malformed lines are logged and skipped. Bytes that are not valid UTF-8
/// become U+FFFD, so a badly encoded card name only fails its own lookup.
/// Only I/O failures are returned.
pub fn read_decklist<P: AsRef<Path>>(path: P) -> Result<Vec<DeckEntry>, DecklistError> {
    let file = File::open(path.as_ref())?;
    let mut reader = io::BufReader::new(file);
    let mut entries = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            log::warn!("Line is not valid UTF-8, decoded as: {}", line.trim());
        }

        match parse_line(&line) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {}
            Err(e) => log::warn!("Skipping line: {}", e),
        }
    }

    Ok(entries)
}

/// Resolves decklist entries against a card catalog, one lookup at a time.
pub struct DeckLoader<'a, C: CardCatalog> {
    catalog: &'a C,
    delay: Duration,
}

impl<'a, C: CardCatalog> DeckLoader<'a, C> {
    /// `delay` is raised to `MIN_REQUEST_DELAY` if it is shorter
    pub fn new(catalog: &'a C, delay: Duration) -> Self {
        Self {
            catalog,
            delay: delay.max(MIN_REQUEST_DELAY),
        }
    }

    /// Pause applied after each lookup
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Look up every entry in order. Entries the catalog cannot resolve are
    /// dropped. The delay follows every lookup, successful or not.
    pub fn resolve(&self, entries: &[DeckEntry]) -> Vec<CardRecord> {
        let mut records = Vec::with_capacity(entries.len());

        for entry in entries {
            log::info!("Processing: {} (x{})", entry.name, entry.quantity);

            match self.catalog.lookup(&entry.name) {
                Some(card) => records.push(card.into_record(entry.quantity)),
                None => log::warn!(
                    "Skipping '{}' due to fetch error or not found",
                    entry.name
                ),
            }

            thread::sleep(self.delay);
        }

        records
    }

    /// Read the decklist at `path` and resolve every entry
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<CardRecord>, DecklistError> {
        let entries = read_decklist(path)?;
        log::info!("Read {} decklist entries", entries.len());
        Ok(self.resolve(&entries))
    }
}

#[cfg(test)]
#[path = "decklist_tests.rs"]
mod tests;
