use bit_reduction::{count_bits_with_observer, BitString, OperationCount, ReductionObserver};
use cosmwasm_std::Api;

use crate::{interface::CountResponse, Config, ContractError};

/// Reports the count right after the leading one is found, the same point at
/// which a plain run would print its diagnostic.
pub struct DebugObserver<'a> {
    pub api: &'a dyn Api,
}

impl ReductionObserver for DebugObserver<'_> {
    fn on_leading_bit(&mut self, index: usize, count: OperationCount) {
        self.api
            .debug(&format!("leading one at index {index}, count={count}"));
    }
}

/// Validates `bits` against the configured limit and counts its operations.
///
/// # Errors
/// - Fails if `bits` is longer than `config.max_bits`.
/// - Fails if `bits` is not a binary number with at least one set bit.
pub fn checked_count(
    config: &Config,
    bits: &str,
    observer: impl ReductionObserver,
) -> Result<(BitString, OperationCount), ContractError> {
    config.check_len(bits)?;
    let bits = BitString::parse(bits)?;
    let count = count_bits_with_observer(&bits, observer);
    Ok((bits, count))
}

pub fn count_response(bits: &BitString, count: OperationCount) -> CountResponse {
    CountResponse {
        bits: bits.to_string(),
        operations: count.0,
    }
}
