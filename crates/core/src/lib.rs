//! Hermes Core Domain
//!
//! Pure domain types for the Hermes order client.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod order;
pub mod wire;

// Re-export commonly used types at crate root
pub use order::{Order, OrderId, Side, TraderId};
pub use wire::{FormatError, ORDER_FIELD_COUNT, parse_order, validate};
