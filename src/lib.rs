#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use interval_notation::{Interval, Notation};
//!
//! // Parse an interval from its bracket notation
//! let band: Interval = "[2,5)".parse()?;
//!
//! assert_eq!(band.notation(), Notation::RightOpen);
//! assert_eq!(band.to_string(), "[2,5)");
//!
//! // Compare the whole interval against a scalar
//! assert!(band.is_greater_than(1));
//! assert!(!band.is_greater_than(2)); // 2 is included by `[`
//! assert!(band.is_less_than(5)); // 5 is excluded by `)`
//!
//! // Unbounded sides use an open bracket with no numeral
//! let from_one: Interval = "[1,)".parse()?;
//! assert!(from_one.is_greater_than_or_equal_to(1));
//! # Ok::<(), interval_notation::IntervalError>(())
//! ```

mod interval;
mod notation;

pub use interval::{Interval, IntervalError, Scalar};
pub use notation::Notation;

#[cfg(test)]
#[path = "tests/interval_tests.rs"]
mod tests;
