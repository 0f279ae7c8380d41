pub mod common;
pub mod execute;
pub mod query;

pub use common::*;
pub use execute::*;
pub use query::*;
