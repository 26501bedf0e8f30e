//! Scryfall API client for looking up cards by exact name
//!
//! Uses blocking reqwest: lookups happen strictly one after another.

use crate::error::{CatalogError, CatalogResult};
use crate::models::CardRecord;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = "MTG-ManaReader/1.0";

/// Scryfall card response, reduced to the fields the analysis uses
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScryfallCard {
    pub name: String,
    #[serde(default)]
    pub color_identity: Vec<String>,
    #[serde(default)]
    pub type_line: Option<String>,
    /// Converted mana cost; absent on some reversible and token-like objects
    #[serde(default)]
    pub cmc: Option<f64>,
}

impl ScryfallCard {
    /// Attach a decklist quantity, producing the record used for aggregation
    pub fn into_record(self, quantity: u32) -> CardRecord {
        CardRecord {
            name: self.name,
            color_identity: self.color_identity,
            type_line: self.type_line,
            cmc: self.cmc,
            quantity,
        }
    }
}

/// Scryfall API error response. The HTTP status is taken from the response.
#[derive(Debug, Deserialize)]
pub struct ScryfallError {
    pub code: String,
    pub details: String,
}

/// Anything that can resolve a card name to Scryfall data.
///
/// `lookup` never fails loudly: a missing card is logged and reported as `None`.
pub trait CardCatalog {
    fn lookup(&self, name: &str) -> Option<ScryfallCard>;
}

pub struct ScryfallClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ScryfallClient {
    /// Create a client against `base_url` (no trailing slash needed)
    pub fn new(base_url: &str, timeout: Duration) -> CatalogResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a card from Scryfall by exact name. One request, no retry.
    pub fn fetch_card_named(&self, name: &str) -> CatalogResult<ScryfallCard> {
        let url = format!(
            "{}/cards/named?exact={}",
            self.base_url,
            urlencoding::encode(name)
        );

        log::debug!("Fetching card from Scryfall: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        if status.is_success() {
            let body = response.text()?;
            Ok(serde_json::from_str::<ScryfallCard>(&body)?)
        } else {
            match response.json::<ScryfallError>() {
                Ok(error) => Err(CatalogError::ApiResponse {
                    code: error.code,
                    details: error.details,
                }),
                Err(_) => Err(CatalogError::HttpStatus(status)),
            }
        }
    }
}

impl CardCatalog for ScryfallClient {
    fn lookup(&self, name: &str) -> Option<ScryfallCard> {
        match self.fetch_card_named(name) {
            Ok(card) => Some(card),
            Err(e) => {
                log::warn!("Error fetching data for '{}': {}", name, e);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
