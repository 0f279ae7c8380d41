pub mod contract;
mod error;
pub mod interface;
pub mod msg;
pub mod state;

pub mod entrypoints;
pub mod storage;

pub use crate::error::ContractError;
pub use storage::*;

#[cfg(test)]
mod tests;
