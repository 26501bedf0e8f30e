use crate::analysis::{ColorTally, CostTally, DeckAnalysis};
use crate::models::CardRecord;

/// Number of resolved cards shown in the preview table
pub const PREVIEW_ROWS: usize = 5;

pub fn format_card_preview(records: &[CardRecord], rows: usize) -> String {
    let shown: Vec<&CardRecord> = records.iter().take(rows).collect();

    let mut max_name_len = "Name".len();
    let mut max_type_len = "Type".len();
    for record in &shown {
        max_name_len = max_name_len.max(record.name.chars().count());
        let type_len = record.type_line.as_deref().unwrap_or("-").chars().count();
        max_type_len = max_type_len.max(type_len);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_w$}  {:>3}  {:<8}  {:<type_w$}  {:>4}\n",
        "Name",
        "Qty",
        "Identity",
        "Type",
        "CMC",
        name_w = max_name_len,
        type_w = max_type_len
    ));

    for record in shown {
        let identity = if record.color_identity.is_empty() {
            "-".to_string()
        } else {
            record.color_identity.join("")
        };
        let cmc = record
            .cmc
            .map(|c| format!("{c}"))
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:<name_w$}  {:>3}  {:<8}  {:<type_w$}  {:>4}\n",
            record.name,
            record.quantity,
            identity,
            record.type_line.as_deref().unwrap_or("-"),
            cmc,
            name_w = max_name_len,
            type_w = max_type_len
        ));
    }

    output
}

/// Raw bucket counts, zero buckets omitted
pub fn format_color_counts(tally: &ColorTally) -> String {
    let buckets = tally.non_zero();
    if buckets.is_empty() {
        return "(no colored or colorless nonland cards)\n".to_string();
    }

    buckets
        .iter()
        .map(|(bucket, count)| format!("{}: {count}\n", bucket.code()))
        .collect()
}

pub fn format_color_percentages(tally: &ColorTally) -> String {
    tally
        .percentages()
        .iter()
        .map(|(bucket, share)| {
            format!("{} ({}): {share:.1}%\n", bucket.code(), bucket.as_str())
        })
        .collect()
}

pub fn format_mana_curve(costs: &CostTally) -> String {
    if costs.is_empty() {
        return "(no nonland cards with a mana value)\n".to_string();
    }

    costs
        .iter()
        .map(|(cost, count)| format!("{cost}: {count}\n"))
        .collect()
}

/// Full console report, in the order the sections are computed
pub fn format_report(records: &[CardRecord], analysis: &DeckAnalysis) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n--- Card Data (first {} of {}) ---\n",
        PREVIEW_ROWS.min(records.len()),
        records.len()
    ));
    output.push_str(&format_card_preview(records, PREVIEW_ROWS));

    output.push_str(&format!(
        "\n--- Total Color Identity (per nonland card) ---\n{} nonland / {} land cards\n",
        analysis.nonland_cards, analysis.land_cards
    ));
    output.push_str(&format_color_counts(&analysis.colors));

    if !analysis.colors.is_empty() {
        output.push_str("\n--- Color Identity Percentages ---\n");
        output.push_str(&format_color_percentages(&analysis.colors));
    }

    output.push_str("\n--- Total CMC Costs Per Amount ---\n");
    output.push_str(&format_mana_curve(&analysis.costs));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(
        name: &str,
        identity: &[&str],
        type_line: &str,
        cmc: Option<f64>,
        quantity: u32,
    ) -> CardRecord {
        CardRecord {
            name: name.to_string(),
            color_identity: identity.iter().map(|c| c.to_string()).collect(),
            type_line: Some(type_line.to_string()),
            cmc,
            quantity,
        }
    }

    #[test]
    fn test_format_card_preview_limits_rows() {
        let records: Vec<CardRecord> = (0..8)
            .map(|i| card(&format!("Card {i}"), &["G"], "Creature", Some(1.0), 1))
            .collect();

        let output = format_card_preview(&records, PREVIEW_ROWS);

        // Header plus five rows
        assert_eq!(output.lines().count(), 6);
        assert!(output.contains("Card 4"));
        assert!(!output.contains("Card 5"));
    }

    #[test]
    fn test_format_card_preview_placeholders() {
        let mut record = card("Odd Card", &[], "Artifact", None, 2);
        record.type_line = None;

        let output = format_card_preview(&[record], PREVIEW_ROWS);
        let row = output.lines().nth(1).unwrap();
        assert!(row.starts_with("Odd Card"));
        assert_eq!(row.matches('-').count(), 3);
    }

    #[test]
    fn test_format_color_counts() {
        let deck = vec![
            card("Bolt", &["R"], "Instant", Some(1.0), 4),
            card("Strix", &["U", "B"], "Artifact Creature", Some(2.0), 1),
        ];
        let analysis = DeckAnalysis::new(&deck);

        assert_eq!(format_color_counts(&analysis.colors), "U: 1\nB: 1\nR: 4\n");
    }

    #[test]
    fn test_format_color_percentages() {
        let deck = vec![
            card("Bolt", &["R"], "Instant", Some(1.0), 3),
            card("Ring", &[], "Artifact", Some(1.0), 1),
        ];
        let analysis = DeckAnalysis::new(&deck);

        assert_eq!(
            format_color_percentages(&analysis.colors),
            "R (Red): 75.0%\nC (Colorless): 25.0%\n"
        );
    }

    #[test]
    fn test_format_mana_curve_sorted() {
        let deck = vec![
            card("Big", &["G"], "Creature", Some(5.0), 1),
            card("Small", &["G"], "Creature", Some(1.0), 4),
        ];
        let analysis = DeckAnalysis::new(&deck);

        assert_eq!(format_mana_curve(&analysis.costs), "1: 4\n5: 1\n");
    }

    #[test]
    fn test_format_report_lands_only_has_no_percentages() {
        let deck = vec![card("Forest", &["G"], "Basic Land — Forest", Some(0.0), 20)];
        let analysis = DeckAnalysis::new(&deck);

        let output = format_report(&deck, &analysis);
        assert!(output.contains("0 nonland / 20 land cards"));
        assert!(!output.contains("Color Identity Percentages"));
        assert!(output.contains("(no nonland cards with a mana value)"));
    }
}
