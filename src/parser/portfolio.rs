use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::normalize::parse_number;
use super::{element_text, Parsed, SkipReason};
use crate::error::{Error, Result};
use crate::models::Holding;
use crate::settings::{HOLDINGS_SELECTOR, HOLDINGS_TABLE, MIN_HOLDING_CELLS, SYMBOL_DELIMITER};

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(HOLDINGS_TABLE).unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse(HOLDINGS_SELECTOR).unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Parse an investor page's holdings table, in row order.
///
/// The first row is always treated as the header. Columns are
/// stock ("SYM - Name"), % of portfolio, shares, price, value; extra
/// trailing columns are ignored.
pub fn parse_holdings(html: &str) -> Result<Parsed<Holding>> {
    let document = Html::parse_document(html);
    if document.select(&TABLE).next().is_none() {
        return Err(Error::MissingElement(HOLDINGS_TABLE));
    }

    let parsed = Parsed::collect(
        document
            .select(&ROW)
            .enumerate()
            .skip(1)
            .map(|(i, row)| (i, parse_row(&row))),
    );

    for skip in &parsed.skipped {
        debug!("Skipping holdings row #{}: {}", skip.index, skip.reason);
    }
    Ok(parsed)
}

fn parse_row(row: &ElementRef) -> std::result::Result<Holding, SkipReason> {
    let cells: Vec<String> = row.select(&CELL).map(|td| element_text(&td)).collect();
    if cells.len() < MIN_HOLDING_CELLS {
        return Err(SkipReason::TooFewCells { found: cells.len() });
    }

    let (symbol, name) = split_stock(&cells[0]).ok_or_else(|| SkipReason::SymbolSplit {
        text: cells[0].clone(),
    })?;

    Ok(Holding {
        symbol,
        name,
        portfolio_weight: parse_number(&cells[1]) / 100.0,
        shares: parse_number(&cells[2]),
        cost_price: parse_number(&cells[3]),
        value: parse_number(&cells[4]),
    })
}

/// "AAPL - Apple Inc." -> ("AAPL", "Apple Inc."). Exactly one delimiter allowed,
/// so tickers like "BRK-B" are rejected.
pub fn split_stock(text: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = text.split(SYMBOL_DELIMITER).collect();
    match parts[..] {
        [symbol, name] => Some((symbol.trim().to_string(), name.trim().to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn split_symbol_and_name() {
        assert_eq!(
            split_stock("AAPL - Apple Inc."),
            Some(("AAPL".to_string(), "Apple Inc.".to_string()))
        );
        assert_eq!(split_stock("BRK-B - Berkshire Hathaway"), None);
        assert_eq!(split_stock("Cash"), None);
    }

    #[test]
    fn ackman_fixture() {
        let parsed = parse_holdings(&fixture("portfolio")).unwrap();
        let symbols: Vec<&str> = parsed.records.iter().map(|h| h.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["CMG", "HLT", "GOOG"]);

        let cmg = &parsed.records[0];
        assert_eq!(cmg.name, "Chipotle Mexican Grill");
        assert!(close(cmg.portfolio_weight, 0.1931));
        assert_eq!(cmg.shares, 1_012_482.0);
        assert_eq!(cmg.cost_price, 2287.0);
        assert_eq!(cmg.value, 2_315_546_000.0);
    }

    #[test]
    fn unparseable_cell_keeps_row() {
        let parsed = parse_holdings(&fixture("portfolio")).unwrap();
        let goog = parsed.records.iter().find(|h| h.symbol == "GOOG").unwrap();
        assert_eq!(goog.name, "Alphabet Inc. CL C");
        assert!(close(goog.portfolio_weight, 0.1234));
        assert_eq!(goog.shares, 0.0);
        assert_eq!(goog.cost_price, 1234.56);
    }

    #[test]
    fn malformed_rows_are_recorded() {
        let parsed = parse_holdings(&fixture("portfolio")).unwrap();
        let indices: Vec<usize> = parsed.skipped.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![3, 4, 6]);
        assert_eq!(
            parsed.skipped[0].reason,
            SkipReason::SymbolSplit { text: "BRK-B - Berkshire Hathaway CL B".into() }
        );
        assert_eq!(parsed.skipped[1].reason, SkipReason::TooFewCells { found: 4 });
        assert!(matches!(parsed.skipped[2].reason, SkipReason::SymbolSplit { .. }));
    }

    #[test]
    fn header_only_table_is_empty() {
        let parsed = parse_holdings(&fixture("portfolio_header_only")).unwrap();
        assert!(parsed.records.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn first_row_skipped_even_if_data() {
        let html = r#"<table id="grid">
            <tr><td>AAA - First</td><td>1%</td><td>1</td><td>1</td><td>1</td></tr>
            <tr><td>BBB - Second</td><td>2%</td><td>2</td><td>2</td><td>2</td></tr>
        </table>"#;
        let parsed = parse_holdings(html).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].symbol, "BBB");
    }

    #[test]
    fn missing_table_is_fatal() {
        let err = parse_holdings("<html><body><p>No data</p></body></html>").unwrap_err();
        assert!(matches!(err, Error::MissingElement("#grid")));
    }

    #[test]
    fn deterministic() {
        let html = fixture("portfolio");
        assert_eq!(parse_holdings(&html).unwrap(), parse_holdings(&html).unwrap());
    }
}
