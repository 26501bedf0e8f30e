//! Deck statistics: color identity and mana curve over nonland cards

use crate::models::{CardRecord, ColorBucket};
use std::collections::BTreeMap;

/// Split a deck into (nonlands, lands) by type line
pub fn split_lands(records: &[CardRecord]) -> (Vec<&CardRecord>, Vec<&CardRecord>) {
    records.iter().partition(|record| !record.is_land())
}

/// Weighted count of cards per color identity bucket.
///
/// A multicolor card adds its full quantity to every color it contains, so
/// the bucket total can exceed the number of cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTally {
    counts: BTreeMap<ColorBucket, u64>,
}

impl ColorTally {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CardRecord>,
    {
        let mut tally = Self::default();

        for record in records {
            let quantity = u64::from(record.quantity);

            if record.color_identity.is_empty() {
                if !record.is_land() {
                    tally.add(ColorBucket::Colorless, quantity);
                }
                continue;
            }

            for code in &record.color_identity {
                match ColorBucket::from_code(code) {
                    Some(bucket) => tally.add(bucket, quantity),
                    None => log::warn!(
                        "Unexpected color identity '{}' on '{}'",
                        code,
                        record.name
                    ),
                }
            }
        }

        tally
    }

    fn add(&mut self, bucket: ColorBucket, quantity: u64) {
        *self.counts.entry(bucket).or_insert(0) += quantity;
    }

    pub fn get(&self, bucket: ColorBucket) -> u64 {
        self.counts.get(&bucket).copied().unwrap_or(0)
    }

    /// Buckets with a count above zero, in W U B R G C order
    pub fn non_zero(&self) -> Vec<(ColorBucket, u64)> {
        self.counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(bucket, count)| (*bucket, *count))
            .collect()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of each non-zero bucket in the total, scaled to 100.
    /// Empty when nothing was counted.
    pub fn percentages(&self) -> Vec<(ColorBucket, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }

        self.non_zero()
            .into_iter()
            .map(|(bucket, count)| (bucket, count as f64 / total as f64 * 100.0))
            .collect()
    }
}

/// Weighted count of cards per whole mana value, ascending
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostTally {
    counts: BTreeMap<u32, u64>,
}

impl CostTally {
    /// Group records by truncated mana value. Records without a usable
    /// mana value are left out.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CardRecord>,
    {
        let mut counts = BTreeMap::new();

        for record in records {
            let Some(cmc) = record.cmc else {
                continue;
            };
            if !cmc.is_finite() || cmc < 0.0 {
                log::debug!("Ignoring mana value {} on '{}'", cmc, record.name);
                continue;
            }

            *counts.entry(cmc.trunc() as u32).or_insert(0) += u64::from(record.quantity);
        }

        Self { counts }
    }

    pub fn get(&self, cost: u32) -> u64 {
        self.counts.get(&cost).copied().unwrap_or(0)
    }

    /// (cost, count) pairs in ascending cost order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(cost, count)| (*cost, *count))
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Everything the report needs, computed once from the resolved deck
#[derive(Debug, Clone)]
pub struct DeckAnalysis {
    pub colors: ColorTally,
    pub costs: CostTally,
    pub nonland_cards: u64,
    pub land_cards: u64,
}

impl DeckAnalysis {
    pub fn new(records: &[CardRecord]) -> Self {
        let (nonlands, lands) = split_lands(records);

        Self {
            colors: ColorTally::from_records(nonlands.iter().copied()),
            costs: CostTally::from_records(nonlands.iter().copied()),
            nonland_cards: nonlands.iter().map(|r| u64::from(r.quantity)).sum(),
            land_cards: lands.iter().map(|r| u64::from(r.quantity)).sum(),
        }
    }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
