//! Core invoice types, clock abstraction and total calculation.
//!
//! An [`Invoice`] is append-only: items and comments can be added but never
//! removed, and its creation timestamp is fixed at construction.

mod builder;
mod clock;
mod error;
mod totals;
mod types;

pub use builder::*;
pub use clock::*;
pub use error::*;
pub use totals::*;
pub use types::*;
