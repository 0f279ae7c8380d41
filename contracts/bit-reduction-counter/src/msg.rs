use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use crate::{
    interface::{CountResponse, ReductionStep},
    Config,
};

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to `DEFAULT_MAX_BITS`.
    pub max_bits: Option<u32>,
}

#[cw_serde]
pub enum ExecuteMsg {
    Count { bits: String },
    UpdateConfig { max_bits: u32 },
    ChangeAdmin { new_admin: Addr },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(Addr)]
    Admin {},

    #[returns(CountResponse)]
    Count { bits: String },

    #[returns(Vec<CountResponse>)]
    CountBatch { inputs: Vec<String> },

    #[returns(Vec<ReductionStep>)]
    Steps { bits: String },

    #[returns(Option<u64>)]
    Recorded { bits: String },
}
