use anyhow::Result;
use chrono::Utc;
use serde_json::json;

use hangarbay::format;
use hangarbay::types::ContractPage;
use hangarbay::ui::BrowseOutcome;

/// Print a plain-text representation of the browse outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
    if !outcome.accepted {
        println!("Browse cancelled");
        return;
    }

    match &outcome.selection {
        Some(contract) => println!("{}\t{}", contract.contract_id, contract.display_title()),
        None => println!("No selection"),
    }
}

/// Format the browse outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
    let selection = match &outcome.selection {
        Some(contract) => serde_json::to_value(contract)?,
        None => serde_json::Value::Null,
    };

    let payload = json!({
        "accepted": outcome.accepted,
        "filters": serde_json::to_value(&outcome.filters)?,
        "selection": selection,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the browse outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

/// Print one fetched page as an aligned plain-text listing.
pub(crate) fn print_page_plain(page: &ContractPage) {
    let now = Utc::now();
    println!(
        "page {}/{} · {} contracts",
        page.page,
        page.total_pages(),
        page.total
    );
    for contract in &page.items {
        println!(
            "{:>12}  {:<40}  {:>10}  {}",
            contract.contract_id,
            truncate(&contract.display_title(), 40),
            format::isk(contract.price, 2),
            format::time_left(contract.date_expired, now),
        );
    }
}

pub(crate) fn print_page_json(page: &ContractPage) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(page)?);
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangarbay::filters::FilterSet;
    use serde_json::Value;

    #[test]
    fn json_format_reports_a_cancelled_session() {
        let outcome = BrowseOutcome {
            accepted: false,
            filters: FilterSet::default(),
            selection: None,
        };

        let json = format_outcome_json(&outcome).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["accepted"], false);
        assert_eq!(value["selection"], Value::Null);
        assert_eq!(value["filters"]["page"], 1);
    }

    #[test]
    fn truncate_preserves_short_text() {
        assert_eq!(truncate("Vindicator", 40), "Vindicator");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }
}
