//! Terminal renderers.
//!
//! Every function here returns a `String` and performs no I/O, so the binary
//! decides where text goes and the tests can look at it.

use crate::domain::account::AccountSnapshot;
use crate::domain::market::Quote;
use crate::domain::order::{OrderHistory, OrderHistoryEntry, OrderResult, ValidationErrors};
use crate::error::DeskError;
use crate::shared::Side;

use colored::Colorize;

pub const TITLE: &str = "Binance Futures Testnet Order Desk";

pub const HISTORY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn banner() -> String {
    let rule = "═".repeat(TITLE.len() + 4);
    format!(
        "{}\n{}\n{}",
        rule.cyan(),
        format!("  {}  ", TITLE).cyan().bold(),
        rule.cyan()
    )
}

pub fn connect_hint() -> String {
    "Please enter your Binance Futures Testnet API credentials to connect."
        .blue()
        .to_string()
}

pub fn connected() -> String {
    "API connected and symbols loaded!".green().bold().to_string()
}

pub fn connection_error(err: &DeskError) -> String {
    format!("API Connection Error: {}", err.user_message())
        .red()
        .to_string()
}

// ─── Market panel ────────────────────────────────────────────────────────────

pub fn price_line(quote: &Quote) -> String {
    format!("{} {}", "Current Price:".bold(), quote)
}

pub fn balance_line(account: &AccountSnapshot) -> String {
    let value = if account.is_available() {
        account.balance.green()
    } else {
        account.balance.yellow()
    };
    format!("{} {}", format!("{} Balance:", account.asset).bold(), value)
}

// ─── Order outcome ───────────────────────────────────────────────────────────

/// Success line followed by the Field/Value table.
pub fn order_placed(result: &OrderResult) -> String {
    let rows = [
        ("Order ID", result.order_id.to_string()),
        ("Symbol", result.symbol.to_string()),
        ("Side", result.side.to_string()),
        ("Type", result.order_type.clone()),
        ("Status", result.status.clone()),
        ("Price", result.price.to_string()),
        ("Original Quantity", result.orig_qty.to_string()),
        ("Executed Quantity", result.executed_qty.to_string()),
    ];

    let width = rows.iter().map(|(field, _)| field.len()).max().unwrap_or(0);
    let mut out = format!(
        "{}\n",
        format!("Order placed successfully! Order ID: {}", result.order_id)
            .green()
            .bold()
    );
    out.push_str(&format!(
        "  {}  {}\n",
        format!("{:<width$}", "Field").bold(),
        "Value".bold()
    ));
    for (field, value) in rows {
        out.push_str(&format!("  {:<width$}  {}\n", field, value));
    }
    out
}

pub fn order_failed(err: &DeskError) -> String {
    match err {
        DeskError::Validation(errors) => validation_errors(errors),
        other => format!("Order failed: {}", other.user_message())
            .red()
            .to_string(),
    }
}

/// One line per message.
pub fn validation_errors(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|m| m.red().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

// ─── History ─────────────────────────────────────────────────────────────────

pub fn history_line(entry: &OrderHistoryEntry) -> String {
    let side = match entry.side {
        Side::Buy => "BUY".green().bold(),
        Side::Sell => "SELL".red().bold(),
    };
    format!(
        "{} - {} | Type: {} | Status: {} | Price: {} | Qty: {}",
        format!(
            "[{}] {}",
            entry.timestamp.format(HISTORY_TIME_FORMAT),
            entry.symbol
        )
        .bold(),
        side,
        entry.order_type,
        entry.status,
        entry.price,
        entry.quantity
    )
}

/// Empty when nothing has been placed yet.
pub fn history(history: &OrderHistory) -> String {
    if history.is_empty() {
        return String::new();
    }
    let mut out = format!("{}\n", "Order History (Session)".yellow().bold());
    for entry in history.recent_first() {
        out.push_str(&history_line(entry));
        out.push('\n');
    }
    out
}

pub fn footer() -> String {
    [
        "Note:".bold().to_string(),
        "This desk talks to the Binance Futures Testnet only. Safe for testing.".to_string(),
        "Keep your system clock synchronized to avoid timestamp errors.".to_string(),
        "Use responsibly and at your own risk.".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderHistoryEntry;
    use crate::shared::Symbol;
    use chrono::{Local, TimeZone};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn result(side: Side) -> OrderResult {
        OrderResult {
            order_id: 4_051_234,
            symbol: Symbol::from("BTCUSDT"),
            side,
            order_type: "LIMIT".to_string(),
            status: "NEW".to_string(),
            price: Decimal::from_str("27000.10").unwrap(),
            orig_qty: Decimal::from_str("0.010").unwrap(),
            executed_qty: Decimal::from_str("0.000").unwrap(),
        }
    }

    fn entry(side: Side, second: u32) -> OrderHistoryEntry {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, second).unwrap();
        OrderHistoryEntry::from_result(&result(side), ts)
    }

    #[test]
    fn test_price_line() {
        let quote = Quote::Price(Decimal::from_str("27123.5").unwrap());
        assert!(price_line(&quote).contains("$ 27123.50000000"));
        assert!(price_line(&Quote::Unavailable).ends_with('-'));
    }

    #[test]
    fn test_balance_line() {
        let line = balance_line(&AccountSnapshot::unavailable("USDT"));
        assert!(line.contains("USDT Balance:"));
        assert!(line.contains("N/A"));
    }

    #[test]
    fn test_order_placed_table() {
        let out = order_placed(&result(Side::Buy));
        assert!(out.contains("Order placed successfully! Order ID: 4051234"));
        for field in [
            "Order ID",
            "Symbol",
            "Side",
            "Type",
            "Status",
            "Price",
            "Original Quantity",
            "Executed Quantity",
        ] {
            assert!(out.contains(field), "missing {field}");
        }
        assert!(out.contains("27000.10"));
        assert!(out.contains("0.010"));
    }

    #[test]
    fn test_order_failed() {
        let out = order_failed(&DeskError::OrderRejected("Quantity less than minimum".into()));
        assert!(out.contains("Order failed: Quantity less than minimum"));
    }

    #[test]
    fn test_connection_error() {
        let out = connection_error(&DeskError::ConnectionFailed("Invalid API-key".into()));
        assert!(out.contains("API Connection Error: Invalid API-key"));
    }

    #[test]
    fn test_history_line_format() {
        let line = history_line(&entry(Side::Sell, 7));
        assert!(line.contains("[2024-03-09 14:05:07] BTCUSDT"));
        assert!(line.contains("SELL"));
        assert!(line.contains("| Type: LIMIT | Status: NEW | Price: 27000.10 | Qty: 0.010"));
    }

    #[test]
    fn test_history_most_recent_first() {
        let mut h = OrderHistory::new();
        h.record(entry(Side::Buy, 1));
        h.record(entry(Side::Sell, 2));

        let out = history(&h);
        assert!(out.contains("Order History (Session)"));
        let newer = out.find("14:05:02").unwrap();
        let older = out.find("14:05:01").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_empty_history_renders_nothing() {
        assert!(history(&OrderHistory::new()).is_empty());
    }

    #[test]
    fn test_footer_mentions_testnet_and_clock() {
        let out = footer();
        assert!(out.contains("Testnet"));
        assert!(out.contains("clock"));
    }
}
