//! # invoicekit
//!
//! A small invoice model: sender and recipient parties, line items with a
//! per-item tax rate, free-text comments, and a total with a flat percentage
//! discount.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use invoicekit::core::*;
//! use rust_decimal_macros::dec;
//!
//! let mut invoice = Invoice::new(
//!     "Larry Jinkles",
//!     "Tod Hooper",
//!     "34 Windsor Ln.",
//!     "14 Manslow road",
//!     "lejank@billing.com",
//!     "tod@hooper.example",
//! );
//! invoice.add_item("34 floor building", dec!(3400), dec!(0.1));
//! invoice.add_item("Equipment Rental", dec!(1000), dec!(0.1));
//! invoice.add_item("Fear Tax", dec!(340), dec!(0.0));
//!
//! // Discount is a whole-number percentage, tax rates are fractions.
//! assert_eq!(invoice.calculate_total(dec!(20)).unwrap(), dec!(4232));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, clock, totals, builder |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
