//! Formatted terminal output for the use-case results.
//!
//! We keep formatting code in one place so:
//! - the analytics code stays free of presentation concerns
//! - output changes are localized (golden tests below)

use crate::domain::ViewStockOutput;

/// Header plus a one-line statistics summary of a price window.
pub fn format_stock_summary(output: &ViewStockOutput) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ({}) ===\n", output.company, output.symbol));

    let prices = &output.share_prices;
    let (Some(first), Some(last)) = (prices.first(), prices.last()) else {
        out.push_str("No share prices in the selected window.\n");
        return out;
    };
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    out.push_str(&format!(
        "Window: {} days | first={first:.2} last={last:.2} | min={min:.2} max={max:.2}\n",
        prices.len()
    ));

    out
}

/// Aligned `symbol  company` table.
pub fn format_company_list(rows: &[(String, String)]) -> String {
    let mut out = String::new();
    out.push_str(format!("{:<8} {}", "symbol", "company").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<8} {:-<24}", "", "").trim_end());
    out.push('\n');
    for (symbol, company) in rows {
        out.push_str(&format!("{:<8} {}\n", truncate(symbol, 8), company));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
