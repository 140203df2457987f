//! Ranges over ordered domains in the style of Postgres range types: inclusive
//! or exclusive endpoints, infinite endpoints, a canonical empty range, and
//! union/intersection. Ranges over discrete domains (integers, dates) are
//! normalized to `[)` form, so `(1,3]` and `[2,4)` are the same integer range.
//!
//! ```
//! use pgrange::Range;
//!
//! let a = Range::new(Some(5), Some(15)).unwrap();
//! assert_eq!(a.union(10..20).unwrap().to_string(), "[5,20)");
//! assert_eq!(a.intersection(10..20).unwrap().to_string(), "[10,15)");
//! assert_eq!(Range::with_bounds(Some(0), Some(2), "(]").unwrap().to_string(), "[1,3)");
//! ```

mod bounds;
mod convert;
mod element;
mod error;
mod range;
mod utils;

pub use bounds::BoundSpec;
pub use convert::IntoRange;
pub use element::Element;
pub use error::RangeError;
pub use range::Range;
