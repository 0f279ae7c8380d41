//! ## Bit Reduction
//!
//! Counts how many operations reduce a binary number to zero when odd values
//! are decremented and even values are halved.
//!
//! Every bit below the leading one costs one halving, a set bit costs one extra
//! decrement, and the leading one itself costs a final decrement, so the count is
//! a single pass over the string instead of a simulation.
//!
//! ```
//! assert_eq!(bit_reduction::count("100000").unwrap().0, 6);
//! assert!(bit_reduction::count("000").is_err());
//! ```

mod bit_string;
mod counter;
mod error;
mod steps;

pub use bit_string::BitString;
pub use counter::*;
pub use error::InvalidInputError;
pub use steps::{Operation, ReductionSteps};
