use cosmwasm_std::{Addr, Deps, StdResult};

use crate::{
    interface::{CountResponse, ReductionStep},
    state::{CONFIG, RESULTS},
    Config,
};

use super::{checked_count, count_response};

pub fn get_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn get_admin(deps: Deps) -> StdResult<Addr> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.admin)
}

/// Counts the operations reducing `bits` to zero without recording it.
///
/// # Errors
/// - Fails if `bits` is longer than the configured `max_bits`.
/// - Fails if `bits` is not a binary number with at least one set bit.
pub fn get_count(deps: Deps, bits: String) -> StdResult<CountResponse> {
    let config = CONFIG.load(deps.storage)?;
    let (bits, count) = checked_count(&config, &bits, ())?;
    Ok(count_response(&bits, count))
}

/// Counts every input, in order.
///
/// # Errors
/// - Fails on the first input that `get_count` would reject.
pub fn get_count_batch(deps: Deps, inputs: Vec<String>) -> StdResult<Vec<CountResponse>> {
    let config = CONFIG.load(deps.storage)?;
    inputs
        .iter()
        .map(|bits| -> StdResult<CountResponse> {
            let (bits, count) = checked_count(&config, bits, ())?;
            Ok(count_response(&bits, count))
        })
        .collect()
}

/// Lists the operations reducing `bits` to zero, in the order they apply.
pub fn get_steps(deps: Deps, bits: String) -> StdResult<Vec<ReductionStep>> {
    let config = CONFIG.load(deps.storage)?;
    let (bits, _) = checked_count(&config, &bits, ())?;
    Ok(bits.steps().map(ReductionStep::from).collect())
}

/// Returns the count stored by a previous `Count` execution, if any.
pub fn get_recorded(deps: Deps, bits: String) -> StdResult<Option<u64>> {
    RESULTS.may_load(deps.storage, &bits)
}
