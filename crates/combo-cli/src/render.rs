//! Console rendering of a ranking.

use combo_core::{OutputFormat, Record, Result};
use combo_rank::RankedResult;
use serde::Serialize;

#[derive(Serialize)]
struct JsonEntry<'a> {
    rank: usize,
    items: Vec<&'a str>,
    count: u64,
}

/// The representative's items as received, in byte order.
fn sorted_items(record: &Record) -> Vec<&str> {
    let mut items: Vec<&str> = record.items().iter().map(String::as_str).collect();
    items.sort_unstable();
    items
}

/// One line per entry: rank, the representative's sorted items, count.
pub fn render_text(ranking: &RankedResult) -> String {
    ranking
        .iter()
        .map(|e| {
            format!(
                "Rank: {}, Pizza: {}, Times ordered: {}\n",
                e.rank,
                sorted_items(&e.representative).join(","),
                e.count
            )
        })
        .collect()
}

pub fn render_json(ranking: &RankedResult) -> Result<String> {
    let entries: Vec<JsonEntry> = ranking
        .iter()
        .map(|e| JsonEntry {
            rank: e.rank,
            items: sorted_items(&e.representative),
            count: e.count,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)? + "\n")
}

pub fn render(ranking: &RankedResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(ranking)),
        OutputFormat::Json => render_json(ranking),
    }
}
