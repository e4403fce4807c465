//! Bill Splitting Domain
//!
//! This crate implements the bill-splitting calculation engine: a `Ledger`
//! aggregate owning a working set of line items plus global tax and discount
//! rates, with a pure derivation producing per-participant shares that sum
//! to a well-defined final total.
//!
//! # Invariants
//!
//! - A `LineItem` is valid by construction: non-empty name, non-negative
//!   rate, positive quantity, at least one sharer.
//! - The participant set is derived from items, never maintained separately.
//! - Derivations are total over valid state; the empty bill yields an empty
//!   result, not an error.

pub mod error;
pub mod ledger;
pub mod line_item;
pub mod policy;

pub use error::SplitError;
pub use ledger::{BillResult, Ledger};
pub use line_item::{LineItem, Participant};
pub use policy::DiscountPolicy;
