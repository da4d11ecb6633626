//! Wire-line parsing and validation
//!
//! The engine speaks a single-line text protocol:
//!
//! ```text
//! <orderId> <side> <price> <quantity> <timestamp> <traderId> <isMarketOrder>
//! ```
//!
//! Validation short-circuits on the first violated constraint, so the
//! reported reason always names the leftmost offending field. The checks are
//! purely structural: negative prices and zero or negative quantities pass,
//! matching what the engine's own parser accepts. Whether to reject such
//! values client-side is an open product question, not a parsing rule.

use crate::order::{Order, Side};
use thiserror::Error;

/// Number of whitespace-delimited fields in an order line
pub const ORDER_FIELD_COUNT: usize = 7;

/// First violated constraint of a malformed order line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("wrong field count: expected {ORDER_FIELD_COUNT}, got {0}")]
    FieldCount(usize),

    #[error("invalid order id: {0:?}")]
    OrderId(String),

    #[error("invalid side: expected 'B' or 'S', got {0:?}")]
    Side(String),

    #[error("invalid price: {0:?}")]
    Price(String),

    #[error("invalid quantity: {0:?}")]
    Quantity(String),

    #[error("invalid timestamp: {0:?}")]
    Timestamp(String),

    #[error("invalid trader id: {0:?}")]
    TraderId(String),

    #[error("invalid market-order flag: expected 0 or 1, got {0:?}")]
    MarketFlag(String),
}

/// Parse an order line into a typed record.
///
/// Fields are checked left to right and the first failure wins.
pub fn parse_order(line: &str) -> Result<Order, FormatError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != ORDER_FIELD_COUNT {
        return Err(FormatError::FieldCount(fields.len()));
    }

    let order_id = fields[0]
        .parse()
        .map_err(|_| FormatError::OrderId(fields[0].to_string()))?;

    let side = match fields[1] {
        "B" => Side::Buy,
        "S" => Side::Sell,
        other => return Err(FormatError::Side(other.to_string())),
    };

    let price = fields[2]
        .parse()
        .map_err(|_| FormatError::Price(fields[2].to_string()))?;

    let quantity = fields[3]
        .parse()
        .map_err(|_| FormatError::Quantity(fields[3].to_string()))?;

    let timestamp = fields[4]
        .parse()
        .map_err(|_| FormatError::Timestamp(fields[4].to_string()))?;

    let trader_id = fields[5]
        .parse()
        .map_err(|_| FormatError::TraderId(fields[5].to_string()))?;

    let is_market = match fields[6] {
        "0" => false,
        "1" => true,
        other => return Err(FormatError::MarketFlag(other.to_string())),
    };

    Ok(Order {
        order_id,
        side,
        price,
        quantity,
        timestamp,
        trader_id,
        is_market,
    })
}

/// Check a candidate order line without keeping the record.
///
/// Pure function of its input; no side effects, no network use.
pub fn validate(line: &str) -> Result<(), FormatError> {
    parse_order(line).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_line_parses() {
        let order = parse_order("1 B 100.50 10 169348127 2001 0").unwrap();
        assert_eq!(order.order_id, 1);
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.price, 100.50);
        assert_eq!(order.quantity, 10);
        assert_eq!(order.timestamp, 169348127);
        assert_eq!(order.trader_id, 2001);
        assert!(!order.is_market);
    }

    #[test]
    fn test_market_flag_parses() {
        let order = parse_order("2 S 0 25 169348128 2002 1").unwrap();
        assert_eq!(order.side, Side::Sell);
        assert!(order.is_market);
    }

    #[test]
    fn test_wrong_field_count() {
        for line in [
            "",
            "1",
            "1 B 100.50 10 169348127 2001",
            "1 B 100.50 10 169348127 2001 0 extra",
        ] {
            match validate(line) {
                Err(FormatError::FieldCount(_)) => {}
                other => panic!("expected field-count error for {line:?}, got {other:?}"),
            }
        }
        assert_eq!(
            validate("1 B").unwrap_err(),
            FormatError::FieldCount(2),
        );
    }

    #[test]
    fn test_invalid_side() {
        assert_eq!(
            validate("1 X 100.50 10 169348127 2001 0").unwrap_err(),
            FormatError::Side("X".to_string()),
        );
        // Lowercase is not accepted
        assert!(matches!(
            validate("1 b 100.50 10 169348127 2001 0").unwrap_err(),
            FormatError::Side(_),
        ));
    }

    #[test]
    fn test_invalid_numeric_fields_name_the_field() {
        assert!(matches!(
            validate("abc B 100.50 10 169348127 2001 0").unwrap_err(),
            FormatError::OrderId(_),
        ));
        assert!(matches!(
            validate("1 B notaprice 10 169348127 2001 0").unwrap_err(),
            FormatError::Price(_),
        ));
        assert!(matches!(
            validate("1 B 100.50 ten 169348127 2001 0").unwrap_err(),
            FormatError::Quantity(_),
        ));
        assert!(matches!(
            validate("1 B 100.50 10 yesterday 2001 0").unwrap_err(),
            FormatError::Timestamp(_),
        ));
        assert!(matches!(
            validate("1 B 100.50 10 169348127 trader 0").unwrap_err(),
            FormatError::TraderId(_),
        ));
    }

    #[test]
    fn test_invalid_market_flag() {
        for flag in ["2", "yes", "-1", "10"] {
            let line = format!("1 B 100.50 10 169348127 2001 {flag}");
            assert!(matches!(
                validate(&line).unwrap_err(),
                FormatError::MarketFlag(_),
            ));
        }
    }

    #[test]
    fn test_first_failure_wins() {
        // Both side and flag are bad; the leftmost field is reported
        assert!(matches!(
            validate("1 X 100.50 10 169348127 2001 9").unwrap_err(),
            FormatError::Side(_),
        ));
    }

    // Documented behavior: structurally well-formed but economically
    // questionable values are accepted. Tightening this is a behavior
    // change, not a fix.
    #[test]
    fn test_zero_quantity_accepted() {
        assert!(validate("3 B 100.50 0 169348127 2001 0").is_ok());
    }

    #[test]
    fn test_negative_price_accepted() {
        assert!(validate("14 B -100.00 10 169348136 2012 0").is_ok());
    }

    #[test]
    fn test_negative_quantity_accepted() {
        assert!(validate("15 S 100.00 -5 169348137 2013 0").is_ok());
    }

    #[test]
    fn test_high_precision_price_accepted() {
        let order = parse_order("4 S 100.123456789 10 169348128 2002 0").unwrap();
        assert!((order.price - 100.123456789).abs() < 1e-12);
    }

    #[test]
    fn test_validate_is_idempotent() {
        for line in [
            "1 B 100.50 10 169348127 2001 0",
            "1 X 100.50 10 169348127 2001 0",
            "not an order",
        ] {
            assert_eq!(validate(line), validate(line));
        }
    }

    #[test]
    fn test_reason_strings() {
        assert!(
            validate("1 B")
                .unwrap_err()
                .to_string()
                .starts_with("wrong field count")
        );
        assert!(
            validate("1 Q 100.50 10 169348127 2001 0")
                .unwrap_err()
                .to_string()
                .starts_with("invalid side")
        );
        assert!(
            validate("1 B 100.50 10 169348127 2001 3")
                .unwrap_err()
                .to_string()
                .starts_with("invalid market-order flag")
        );
    }
}
