use bit_reduction::InvalidInputError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("input of {len} bits exceeds max_bits {max}")]
    InputTooLong { len: usize, max: u32 },

    #[error("max_bits must be greater than zero")]
    InvalidMaxBits,

    #[error("unauthorized")]
    Unauthorized {},
}

impl From<ContractError> for StdError {
    fn from(source: ContractError) -> Self {
        Self::generic_err(source.to_string())
    }
}
