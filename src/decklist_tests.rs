//! Tests for decklist parsing and resolution

use super::{parse_line, DeckLoader, MIN_REQUEST_DELAY};
use crate::error::DecklistError;
use crate::models::DeckEntry;
use crate::scryfall::{CardCatalog, ScryfallCard};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// In-memory catalog that records every name it was asked for
struct FakeCatalog {
    cards: HashMap<String, ScryfallCard>,
    calls: RefCell<Vec<String>>,
}

impl FakeCatalog {
    /// Each card is (name, space-separated color identity, type line, cmc)
    fn new(cards: &[(&str, &str, &str, f64)]) -> Self {
        let cards = cards
            .iter()
            .map(|(name, identity, type_line, cmc)| {
                (
                    name.to_string(),
                    ScryfallCard {
                        name: name.to_string(),
                        color_identity: identity
                            .split_whitespace()
                            .map(str::to_string)
                            .collect(),
                        type_line: Some(type_line.to_string()),
                        cmc: Some(*cmc),
                    },
                )
            })
            .collect();
        Self {
            cards,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl CardCatalog for FakeCatalog {
    fn lookup(&self, name: &str) -> Option<ScryfallCard> {
        self.calls.borrow_mut().push(name.to_string());
        self.cards.get(name).cloned()
    }
}

fn entry(quantity: u32, name: &str) -> DeckEntry {
    DeckEntry {
        quantity,
        name: name.to_string(),
    }
}

// ==================== parse_line ====================

#[test]
fn test_parse_line_with_quantity() {
    let parsed = parse_line("4 Lightning Bolt").unwrap();
    assert_eq!(parsed, Some(entry(4, "Lightning Bolt")));
}

#[test]
fn test_parse_line_without_quantity() {
    let parsed = parse_line("Lightning Bolt").unwrap();
    assert_eq!(parsed, Some(entry(1, "Lightning Bolt")));
}

#[test]
fn test_parse_line_blank() {
    assert_eq!(parse_line("").unwrap(), None);
    assert_eq!(parse_line("   \t  ").unwrap(), None);
}

#[test]
fn test_parse_line_trims_surrounding_whitespace() {
    let parsed = parse_line("   12\t  Island   \r").unwrap();
    assert_eq!(parsed, Some(entry(12, "Island")));
}

#[test]
fn test_parse_line_leading_number_is_always_quantity() {
    let parsed = parse_line("1996 World Champion").unwrap();
    assert_eq!(parsed, Some(entry(1996, "World Champion")));
}

#[test]
fn test_parse_line_digits_without_whitespace_are_part_of_name() {
    let parsed = parse_line("4x Lightning Bolt").unwrap();
    assert_eq!(parsed, Some(entry(1, "4x Lightning Bolt")));
}

#[test]
fn test_parse_line_number_only() {
    let parsed = parse_line("4").unwrap();
    assert_eq!(parsed, Some(entry(1, "4")));
}

#[test]
fn test_parse_line_non_ascii_digits_are_part_of_name() {
    // Fullwidth and Arabic-Indic digits are not a quantity
    let parsed = parse_line("\u{FF14} Lightning Bolt").unwrap();
    assert_eq!(parsed, Some(entry(1, "\u{FF14} Lightning Bolt")));

    let parsed = parse_line("\u{0664} Lightning Bolt").unwrap();
    assert_eq!(parsed, Some(entry(1, "\u{0664} Lightning Bolt")));
}

#[test]
fn test_parse_line_zero_quantity_is_malformed() {
    let result = parse_line("0 Black Lotus");
    assert!(matches!(result, Err(DecklistError::MalformedLine { .. })));
}

#[test]
fn test_parse_line_overflowing_quantity_is_malformed() {
    let result = parse_line("99999999999999999999 Relentless Rats");
    match result {
        Err(DecklistError::MalformedLine { line, reason }) => {
            assert_eq!(line, "99999999999999999999 Relentless Rats");
            assert!(reason.contains("not a valid count"));
        }
        other => panic!("Expected MalformedLine, got: {other:?}"),
    }
}

#[test]
fn test_parse_line_keeps_inner_spacing_of_name() {
    let parsed = parse_line("2 Fire // Ice").unwrap();
    assert_eq!(parsed, Some(entry(2, "Fire // Ice")));
}

// ==================== DeckLoader ====================

#[test]
fn test_resolve_keeps_input_order_and_quantities() {
    let catalog = FakeCatalog::new(&[
        ("Lightning Bolt", "R", "Instant", 1.0),
        ("Counterspell", "U", "Instant", 2.0),
        ("Island", "", "Basic Land — Island", 0.0),
    ]);
    let loader = DeckLoader::new(&catalog, Duration::ZERO);

    let records = loader.resolve(&[
        entry(4, "Counterspell"),
        entry(3, "Lightning Bolt"),
        entry(10, "Island"),
    ]);

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Counterspell", "Lightning Bolt", "Island"]);
    assert_eq!(records[0].quantity, 4);
    assert_eq!(records[1].quantity, 3);
    assert_eq!(records[2].quantity, 10);
}

#[test]
fn test_resolve_drops_unknown_cards() {
    let catalog = FakeCatalog::new(&[("Lightning Bolt", "R", "Instant", 1.0)]);
    let loader = DeckLoader::new(&catalog, Duration::ZERO);

    let records = loader.resolve(&[
        entry(1, "Lightnig Bolt"),
        entry(4, "Lightning Bolt"),
        entry(2, "Not A Card"),
    ]);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Lightning Bolt");
}

#[test]
fn test_resolve_looks_up_each_entry_exactly_once() {
    let catalog = FakeCatalog::new(&[("Lightning Bolt", "R", "Instant", 1.0)]);
    let loader = DeckLoader::new(&catalog, Duration::ZERO);

    loader.resolve(&[
        entry(4, "Lightning Bolt"),
        entry(1, "Missing"),
        entry(2, "Lightning Bolt"),
    ]);

    assert_eq!(
        *catalog.calls.borrow(),
        vec!["Lightning Bolt", "Missing", "Lightning Bolt"]
    );
}

#[test]
fn test_resolve_all_failures_yields_empty_collection() {
    let catalog = FakeCatalog::new(&[]);
    let loader = DeckLoader::new(&catalog, Duration::ZERO);

    let records = loader.resolve(&[entry(4, "Foo"), entry(1, "Bar")]);
    assert!(records.is_empty());
    assert_eq!(catalog.calls.borrow().len(), 2);
}

#[test]
fn test_resolve_waits_after_every_lookup() {
    let catalog = FakeCatalog::new(&[("Lightning Bolt", "R", "Instant", 1.0)]);
    let loader = DeckLoader::new(&catalog, Duration::from_millis(80));

    let start = Instant::now();
    loader.resolve(&[
        entry(1, "Lightning Bolt"),
        entry(1, "Missing"),
        entry(1, "Lightning Bolt"),
    ]);

    assert!(start.elapsed() >= Duration::from_millis(240));
}

#[test]
fn test_loader_raises_short_delay_to_minimum() {
    let catalog = FakeCatalog::new(&[]);

    assert_eq!(DeckLoader::new(&catalog, Duration::ZERO).delay(), MIN_REQUEST_DELAY);
    assert_eq!(
        DeckLoader::new(&catalog, Duration::from_millis(10)).delay(),
        MIN_REQUEST_DELAY
    );
    assert_eq!(
        DeckLoader::new(&catalog, Duration::from_millis(120)).delay(),
        Duration::from_millis(120)
    );
}

#[test]
fn test_resolve_with_zero_delay_still_paces_requests() {
    let catalog = FakeCatalog::new(&[("Lightning Bolt", "R", "Instant", 1.0)]);
    let loader = DeckLoader::new(&catalog, Duration::ZERO);

    let start = Instant::now();
    loader.resolve(&[
        entry(1, "Lightning Bolt"),
        entry(1, "Missing"),
        entry(1, "Lightning Bolt"),
    ]);

    assert!(start.elapsed() >= MIN_REQUEST_DELAY * 3);
}
