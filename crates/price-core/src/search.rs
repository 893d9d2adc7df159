//! Product name search and its text-table rendering

use crate::record::Record;
use std::fmt::Write;

/// A matching record with its 1-based display position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    /// Position within the result set, starting at 1
    pub index: usize,
    /// The matched record
    pub record: &'a Record,
}

/// Outcome of a search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<'a> {
    /// Nothing matched the query
    NoResults,
    /// Matches in unit price order
    Found(Vec<SearchHit<'a>>),
}

impl<'a> SearchResult<'a> {
    /// Matched hits, empty for `NoResults`
    pub fn hits(&self) -> &[SearchHit<'a>] {
        match self {
            SearchResult::NoResults => &[],
            SearchResult::Found(hits) => hits,
        }
    }

    /// Whether the search found nothing
    pub fn is_empty(&self) -> bool {
        matches!(self, SearchResult::NoResults)
    }
}

/// Keep records whose name contains `query`, ignoring case on both sides
pub fn find_text<'a>(records: &'a [Record], query: &str) -> SearchResult<'a> {
    let needle = query.to_lowercase();

    let hits: Vec<SearchHit<'a>> = records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .enumerate()
        .map(|(i, record)| SearchHit {
            index: i + 1,
            record,
        })
        .collect();

    if hits.is_empty() {
        SearchResult::NoResults
    } else {
        SearchResult::Found(hits)
    }
}

/// Render hits as a fixed-width text table, header included
pub fn render_hits(hits: &[SearchHit<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:<50} {:<10} {:<10} {:<20} {:<15}",
        "No.", "Name", "Price", "Weight", "File", "Unit price"
    );
    for hit in hits {
        let r = hit.record;
        let _ = writeln!(
            out,
            "{:<5} {:<50} {:<10?} {:<10?} {:<20} {:<15.2}",
            hit.index, r.name, r.price, r.weight, r.source_file, r.unit_price
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Мясо куриное", 250.0, 1.0, "price_1.csv"),
            Record::new("Рыба", 300.0, 1.0, "price_0.csv"),
            Record::new("мясо говяжье", 600.0, 1.0, "price_0.csv"),
        ]
    }

    #[test]
    fn test_case_insensitive_match() {
        let records = sample();
        let lower = find_text(&records, "мясо");
        let upper = find_text(&records, "МЯСО");

        assert_eq!(lower, upper);
        assert_eq!(lower.hits().len(), 2);
    }

    #[test]
    fn test_hits_keep_order_and_renumber() {
        let records = sample();
        let result = find_text(&records, "мясо");
        let hits = result.hits();

        assert_eq!(hits[0].index, 1);
        assert_eq!(hits[0].record.name, "Мясо куриное");
        assert_eq!(hits[1].index, 2);
        assert_eq!(hits[1].record.name, "мясо говяжье");
    }

    #[test]
    fn test_no_results() {
        let records = sample();
        let result = find_text(&records, "сыр");
        assert_eq!(result, SearchResult::NoResults);
        assert!(result.is_empty());
        assert!(result.hits().is_empty());
    }

    #[test]
    fn test_query_whitespace_not_trimmed() {
        let records = sample();
        assert_eq!(find_text(&records, "мясо к").hits().len(), 1);
        assert!(find_text(&records, " рыба").is_empty());
    }

    #[test]
    fn test_render_hits() {
        let records = sample();
        let result = find_text(&records, "рыба");
        let table = render_hits(result.hits());

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("No."));
        assert!(lines[1].starts_with("1     Рыба"));
        assert!(lines[1].contains(" 300.0      1.0 "));
        assert!(lines[1].trim_end().ends_with("300.00"));
    }
}
