//! Router interface consumed by token pools.
//!
//! A pool only accepts transfers from the ramps the router currently
//! authorizes: the on-ramp for outgoing transfers to a destination chain and
//! any registered off-ramp for incoming transfers from a source chain.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
#[derive(QueryResponses)]
pub enum RouterQueryMsg {
    /// On-ramp serving transfers towards `dest_chain_selector`
    #[returns(OnRampResponse)]
    OnRamp { dest_chain_selector: u64 },

    /// Whether `off_ramp` may deliver transfers from `source_chain_selector`
    #[returns(IsOffRampResponse)]
    IsOffRamp {
        source_chain_selector: u64,
        off_ramp: String,
    },
}

#[cw_serde]
pub struct OnRampResponse {
    /// None when the router has no on-ramp for the chain
    pub on_ramp: Option<Addr>,
}

#[cw_serde]
pub struct IsOffRampResponse {
    pub is_off_ramp: bool,
}
