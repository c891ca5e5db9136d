//! Order types for the Sealedbook commit-reveal protocol.
//!
//! An [`Order`] is never persisted — it exists transiently as the input to
//! the canonical encoder and to `reveal`. The enum wire names and the
//! `Direction` ordinal are part of the digest-compatibility surface:
//! [`OrderSide`] and [`AccountType`] are hashed by *name*, [`Direction`]
//! by *ordinal*. That asymmetry is load-bearing and must not be normalized.

use serde::{Deserialize, Serialize};

/// Which side of the trade this order is on. Hashed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Canonical wire name used in the digest encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The account class placing the order. Hashed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum AccountType {
    Retirement,
    Institutional,
}

impl AccountType {
    /// Canonical wire name used in the digest encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Retirement => "RETIREMENT",
            Self::Institutional => "INSTITUTIONAL",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position direction. Hashed by ordinal, not by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Direction {
    Long = 0,
    Short = 1,
}

impl Direction {
    /// Ordinal value used in the digest encoding (LONG=0, SHORT=1).
    #[must_use]
    pub fn ordinal(self) -> u64 {
        match self {
            Self::Long => 0,
            Self::Short => 1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "LONG"),
            Self::Short => write!(f, "SHORT"),
        }
    }
}

/// Plaintext order parameters — the reveal payload.
///
/// Field order matches the canonical encoding tuple:
/// {ticker_symbol, side, account_type, quantity, price, time_in_force,
/// direction}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub ticker_symbol: String,
    pub side: OrderSide,
    pub account_type: AccountType,
    pub quantity: u64,
    pub price: u64,
    /// Caller-defined epoch/timestamp semantics; the engine treats this as
    /// an opaque integer.
    pub time_in_force: u64,
    pub direction: Direction,
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    pub fn dummy(ticker: &str, quantity: u64, price: u64) -> Self {
        Self {
            ticker_symbol: ticker.to_string(),
            side: OrderSide::Buy,
            account_type: AccountType::Institutional,
            quantity,
            price,
            time_in_force: 1_692_741_126_000,
            direction: Direction::Long,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_names() {
        assert_eq!(OrderSide::Buy.name(), "BUY");
        assert_eq!(OrderSide::Sell.name(), "SELL");
        assert_eq!(format!("{}", OrderSide::Buy), "BUY");
    }

    #[test]
    fn account_type_names() {
        assert_eq!(AccountType::Retirement.name(), "RETIREMENT");
        assert_eq!(AccountType::Institutional.name(), "INSTITUTIONAL");
    }

    #[test]
    fn direction_ordinals() {
        assert_eq!(Direction::Long.ordinal(), 0);
        assert_eq!(Direction::Short.ordinal(), 1);
        assert_eq!(format!("{}", Direction::Short), "SHORT");
    }

    #[test]
    fn order_serde_roundtrip() {
        let order = Order::dummy("NVDA", 1550, 445);
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}
