use serde::{Deserialize, Serialize};

/// Identifier carried in the first wire field. The client does not enforce
/// uniqueness; that is the engine's concern.
pub type OrderId = i64;

/// Identifier of the submitting trader
pub type TraderId = i64;

/// Order side (Buy or Sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Single-letter wire representation (`B` / `S`)
    pub fn as_wire(&self) -> char {
        match self {
            Side::Buy => 'B',
            Side::Sell => 'S',
        }
    }
}

/// The seven-field order record submitted to the matching engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub side: Side,
    /// Limit price; the engine ignores it when `is_market` is set
    pub price: f64,
    pub quantity: i64,
    /// Submission timestamp as carried on the wire (engine-defined units)
    pub timestamp: i64,
    pub trader_id: TraderId,
    /// Market order when `1` on the wire, limit order when `0`
    pub is_market: bool,
}

impl Order {
    /// Create a limit order record
    pub fn limit(
        order_id: OrderId,
        side: Side,
        price: f64,
        quantity: i64,
        timestamp: i64,
        trader_id: TraderId,
    ) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity,
            timestamp,
            trader_id,
            is_market: false,
        }
    }

    /// Create a market order record. The price field is still carried on the
    /// wire; the engine fills at best available price.
    pub fn market(
        order_id: OrderId,
        side: Side,
        price: f64,
        quantity: i64,
        timestamp: i64,
        trader_id: TraderId,
    ) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity,
            timestamp,
            trader_id,
            is_market: true,
        }
    }

    /// Format the record as a single wire line.
    ///
    /// Note: floating-point display may not reproduce the exact text a record
    /// was parsed from (`100.50` formats as `100.5`). Callers that must
    /// transmit a user's line verbatim keep the original string instead.
    pub fn to_line(&self) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            self.order_id,
            self.side.as_wire(),
            self.price,
            self.quantity,
            self.timestamp,
            self.trader_id,
            self.is_market as u8,
        )
    }
}
