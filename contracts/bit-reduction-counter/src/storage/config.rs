use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

use crate::ContractError;

/// Default upper bound on input length accepted by the contract.
pub const DEFAULT_MAX_BITS: u32 = 256;

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    pub max_bits: u32,
}

impl Config {
    pub fn new(admin: Addr, max_bits: u32) -> Result<Self, ContractError> {
        if max_bits == 0 {
            return Err(ContractError::InvalidMaxBits);
        }

        Ok(Self { admin, max_bits })
    }

    /// Checks the input length in characters against `max_bits`.
    pub fn check_len(&self, bits: &str) -> Result<(), ContractError> {
        let len = bits.chars().count();
        if len > self.max_bits as usize {
            return Err(ContractError::InputTooLong {
                len,
                max: self.max_bits,
            });
        }
        Ok(())
    }
}
