//! Risk management network (RMN) interface.
//!
//! The RMN is a circuit breaker: while a chain is cursed (or the whole
//! network is under a global curse) pools refuse every transfer with it.

use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
#[derive(QueryResponses)]
pub enum RmnQueryMsg {
    /// True if `subject` (a chain selector) or the global subject is cursed
    #[returns(IsCursedResponse)]
    IsCursed { subject: u64 },
}

#[cw_serde]
pub struct IsCursedResponse {
    pub cursed: bool,
}
