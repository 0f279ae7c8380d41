#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use crate::entrypoints::*;
use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::CONFIG;
use crate::{Config, DEFAULT_MAX_BITS};

use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:bit-reduction-counter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let config = Config::new(info.sender, msg.max_bits.unwrap_or(DEFAULT_MAX_BITS))?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Count { bits } => count(deps, bits),
        ExecuteMsg::UpdateConfig { max_bits } => update_config(deps, info, max_bits),
        ExecuteMsg::ChangeAdmin { new_admin } => change_admin(deps, info, new_admin),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&get_config(deps)?),
        QueryMsg::Admin {} => to_binary(&get_admin(deps)?),
        QueryMsg::Count { bits } => to_binary(&get_count(deps, bits)?),
        QueryMsg::CountBatch { inputs } => to_binary(&get_count_batch(deps, inputs)?),
        QueryMsg::Steps { bits } => to_binary(&get_steps(deps, bits)?),
        QueryMsg::Recorded { bits } => to_binary(&get_recorded(deps, bits)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
