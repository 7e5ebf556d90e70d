//! Session order history: append-only, in memory, lost on restart.

use super::OrderResult;
use crate::shared::{Side, Symbol};
use chrono::{DateTime, Local};
use rust_decimal::Decimal;

/// One successfully submitted order, as displayed to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHistoryEntry {
    /// Local wall clock when the acknowledgement was recorded.
    pub timestamp: DateTime<Local>,
    pub symbol: Symbol,
    pub side: Side,
    pub order_type: String,
    pub status: String,
    pub price: Decimal,
    pub quantity: Decimal,
}

impl OrderHistoryEntry {
    pub fn from_result(result: &OrderResult, timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp,
            symbol: result.symbol.clone(),
            side: result.side,
            order_type: result.order_type.clone(),
            status: result.status.clone(),
            price: result.price,
            quantity: result.orig_qty,
        }
    }
}

/// Orders placed during this session, in insertion order.
///
/// Entries are never mutated or removed.
#[derive(Debug, Clone, Default)]
pub struct OrderHistory {
    entries: Vec<OrderHistoryEntry>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, entry: OrderHistoryEntry) {
        self.entries.push(entry);
    }

    /// Insertion order, oldest first.
    pub fn entries(&self) -> &[OrderHistoryEntry] {
        &self.entries
    }

    /// Display order, newest first.
    pub fn recent_first(&self) -> impl Iterator<Item = &OrderHistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn latest(&self) -> Option<&OrderHistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn result(order_id: i64, side: Side) -> OrderResult {
        OrderResult {
            order_id,
            symbol: Symbol::from("BTCUSDT"),
            side,
            order_type: "LIMIT".to_string(),
            status: "NEW".to_string(),
            price: Decimal::new(25000, 0),
            orig_qty: Decimal::new(5, 1),
            executed_qty: Decimal::ZERO,
        }
    }

    fn at(secs: i64) -> DateTime<Local> {
        Local.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_entry_from_result_uses_orig_qty() {
        let entry = OrderHistoryEntry::from_result(&result(1, Side::Buy), at(0));
        assert_eq!(entry.quantity, Decimal::new(5, 1));
        assert_eq!(entry.price, Decimal::new(25000, 0));
        assert_eq!(entry.order_type, "LIMIT");
        assert_eq!(entry.timestamp, at(0));
    }

    #[test]
    fn test_record_appends_and_preserves() {
        let mut history = OrderHistory::new();
        assert!(history.is_empty());

        history.record(OrderHistoryEntry::from_result(&result(1, Side::Buy), at(0)));
        history.record(OrderHistoryEntry::from_result(&result(2, Side::Sell), at(1)));
        let before: Vec<OrderHistoryEntry> = history.entries().to_vec();

        history.record(OrderHistoryEntry::from_result(&result(3, Side::Buy), at(2)));

        assert_eq!(history.len(), before.len() + 1);
        assert_eq!(&history.entries()[..before.len()], &before[..]);
        assert_eq!(history.latest().unwrap().timestamp, at(2));
    }

    #[test]
    fn test_recent_first_order() {
        let mut history = OrderHistory::new();
        for i in 0..3 {
            history.record(OrderHistoryEntry::from_result(&result(i, Side::Buy), at(i)));
        }
        let stamps: Vec<DateTime<Local>> = history.recent_first().map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![at(2), at(1), at(0)]);
    }
}
