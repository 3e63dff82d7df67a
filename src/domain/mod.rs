//! Domain types.
//!
//! This module defines:
//!
//! - the reference tables (`MortgageRate`, `PaymentFrequency`, `VALID_AMORTIZATION`)
//! - the validated `Mortgage` entity and its payment calculation
//! - run configuration (`RunConfig`, `RecordLayout`)

pub mod lookup;
pub mod mortgage;
pub mod types;

pub use lookup::*;
pub use mortgage::Mortgage;
pub use types::*;
