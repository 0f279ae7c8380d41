use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response};

use crate::{
    state::{CONFIG, RESULTS},
    Config, ContractError,
};

use super::{checked_count, DebugObserver};

/// Counts the operations reducing `bits` to zero and records the result.
///
/// # Parameters
/// - `bits`: A binary number, most significant bit first.
///
/// # Errors
/// - Fails if `bits` is longer than the configured `max_bits`.
/// - Fails if `bits` is empty, has a character other than `0`/`1` or has no set bit.
pub fn count(deps: DepsMut, bits: String) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let (parsed, operations) =
        checked_count(&config, &bits, DebugObserver { api: deps.api })?;

    RESULTS.save(deps.storage, &bits, &operations.0)?;

    Ok(Response::new()
        .add_attribute("action", "count")
        .add_attribute("bits", bits)
        .add_attribute("leading_bit", parsed.leading_one().to_string())
        .add_attribute("operations", operations.to_string()))
}

/// Allows admin to change the maximum accepted input length.
///
/// # Parameters
/// - `max_bits`: The new limit, must be greater than zero.
///
/// # Errors
/// - Reverts the call when the caller is an unauthorized user.
/// - Reverts the call when `max_bits` is zero.
pub fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    max_bits: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }

    let config = Config::new(config.admin, max_bits)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("max_bits", max_bits.to_string()))
}

/// Allows admin to hand the contract over to `new_admin`.
///
/// # Errors
/// - Reverts the call when the caller is an unauthorized user.
pub fn change_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: Addr,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {});
    }

    config.admin = new_admin;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "change_admin"))
}
