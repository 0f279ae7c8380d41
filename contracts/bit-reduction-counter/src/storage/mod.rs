pub mod config;

pub use config::*;

pub use crate::error::ContractError;
