use bit_reduction::Operation;
use cosmwasm_schema::cw_serde;

#[cw_serde]
pub struct CountResponse {
    pub bits: String,
    pub operations: u64,
}

#[cw_serde]
#[derive(Copy)]
pub enum ReductionStep {
    Decrement,
    Halve,
}

impl From<Operation> for ReductionStep {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::Decrement => ReductionStep::Decrement,
            Operation::Halve => ReductionStep::Halve,
        }
    }
}
