//! Message types for the token pool contract
//!
//! This module defines all messages for instantiation, execution, and queries,
//! along with the transfer payloads exchanged with the ramps.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::rate_limiter::{RateLimiterConfig, TokenBucket};
use crate::state::PoolKind;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 token bridged by this pool
    pub token: String,
    /// Burn/mint or lock/release
    pub pool_kind: PoolKind,
    /// Initial allowlist; a non-empty list turns the sender gate on
    pub allow_list: Vec<String>,
    /// Risk management network proxy
    pub rmn_proxy: String,
    /// Router authorizing the ramps
    pub router: String,
    /// Accept rebalancer liquidity (lock/release pools only, default false)
    pub accept_liquidity: Option<bool>,
    /// Owner, defaults to the instantiating address
    pub owner: Option<String>,
}

// ============================================================================
// Transfer Payloads
// ============================================================================

/// Outgoing transfer request from the on-ramp
#[cw_serde]
pub struct LockOrBurnIn {
    /// Recipient on the remote chain, encoded for that chain
    pub receiver: Binary,
    pub remote_chain_selector: u64,
    /// User who initiated the transfer
    pub original_sender: String,
    pub amount: Uint128,
    /// Token the ramp expects this pool to handle
    pub local_token: String,
}

/// Returned as response data from `LockOrBurn`
#[cw_serde]
pub struct LockOrBurnOut {
    pub dest_token_address: Binary,
    pub dest_pool_address: Binary,
    /// Pool specific payload forwarded to the destination pool
    pub dest_pool_data: Binary,
}

/// Incoming transfer request from an off-ramp
#[cw_serde]
pub struct ReleaseOrMintIn {
    /// Sender on the remote chain, encoded for that chain
    pub original_sender: Binary,
    pub remote_chain_selector: u64,
    pub receiver: String,
    pub amount: Uint128,
    pub local_token: String,
    /// Pool that locked or burned on the remote chain
    pub source_pool_address: Binary,
    pub source_pool_data: Binary,
    /// Attestation data, unused by the standard pools
    pub offchain_token_data: Binary,
}

/// Returned as response data from `ReleaseOrMint`
#[cw_serde]
pub struct ReleaseOrMintOut {
    pub local_token: Addr,
    pub destination_amount: Uint128,
}

/// One entry of `ApplyChainUpdates`
///
/// `allowed == false` with an empty `remote_pool_address` removes the chain.
/// Any other update inserts the chain if it is unknown and updates it in
/// place otherwise, unless `add_only` is set.
#[cw_serde]
pub struct ChainUpdate {
    pub remote_chain_selector: u64,
    pub allowed: bool,
    pub remote_pool_address: Binary,
    pub remote_token_address: Binary,
    pub outbound_rate_limiter_config: RateLimiterConfig,
    pub inbound_rate_limiter_config: RateLimiterConfig,
    /// Reject the update if the chain is already registered
    #[serde(default)]
    pub add_only: bool,
}

/// CW20 receive hook payloads
#[cw_serde]
pub enum ReceiveMsg {
    /// Rebalancer funds a lock/release pool
    ProvideLiquidity {},
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers (ramps only)
    // ========================================================================
    /// Burn or lock tokens already sent to the pool by the on-ramp
    LockOrBurn(LockOrBurnIn),

    /// Mint or release tokens to the receiver
    ReleaseOrMint(ReleaseOrMintIn),

    // ========================================================================
    // Chain Registry
    // ========================================================================
    /// Add, update or remove remote chains
    ///
    /// Authorization: Owner only
    ApplyChainUpdates { chains: Vec<ChainUpdate> },

    /// Reconfigure both rate limiters of a chain
    ///
    /// Authorization: Owner or rate limit admin
    SetChainRateLimiterConfig {
        remote_chain_selector: u64,
        outbound_config: RateLimiterConfig,
        inbound_config: RateLimiterConfig,
    },

    /// Rebind the counterpart pool of a chain
    ///
    /// Authorization: Owner only
    SetRemotePool {
        remote_chain_selector: u64,
        remote_pool_address: Binary,
    },

    /// Authorization: Owner only
    ApplyAllowListUpdates {
        removes: Vec<String>,
        adds: Vec<String>,
    },

    // ========================================================================
    // Administration
    // ========================================================================
    /// Authorization: Owner only
    SetRouter { new_router: String },

    /// Authorization: Owner only
    SetRateLimitAdmin { rate_limit_admin: String },

    /// Propose a new owner
    ///
    /// Authorization: Owner only
    TransferOwnership { to: String },

    /// Authorization: Proposed owner only
    AcceptOwnership {},

    // ========================================================================
    // Liquidity (lock/release pools)
    // ========================================================================
    /// CW20 receive hook, used for `ReceiveMsg::ProvideLiquidity`
    Receive(cw20::Cw20ReceiveMsg),

    /// Authorization: Rebalancer only
    WithdrawLiquidity { amount: Uint128 },

    /// Pull liquidity out of a previous pool this pool rebalances
    ///
    /// Authorization: Owner only
    TransferLiquidity { from: String, amount: Uint128 },

    /// Authorization: Owner only
    SetRebalancer { rebalancer: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // ========================================================================
    // Pool Queries
    // ========================================================================
    #[returns(PoolConfigResponse)]
    PoolConfig {},

    #[returns(TypeAndVersionResponse)]
    TypeAndVersion {},

    #[returns(Addr)]
    Token {},

    #[returns(bool)]
    IsSupportedToken { token: String },

    #[returns(OwnershipResponse)]
    Ownership {},

    #[returns(Addr)]
    Router {},

    #[returns(Addr)]
    RmnProxy {},

    #[returns(Option<Addr>)]
    RateLimitAdmin {},

    // ========================================================================
    // Allowlist Queries
    // ========================================================================
    #[returns(Vec<Addr>)]
    AllowList {},

    #[returns(bool)]
    AllowListEnabled {},

    /// Fails with `AllowListNotEnabled` when the gate is off
    #[returns(bool)]
    IsAllowListed { sender: String },

    // ========================================================================
    // Chain Queries
    // ========================================================================
    #[returns(Vec<u64>)]
    SupportedChains {},

    #[returns(bool)]
    IsSupportedChain { remote_chain_selector: u64 },

    #[returns(ChainResponse)]
    Chain { remote_chain_selector: u64 },

    #[returns(Binary)]
    RemotePool { remote_chain_selector: u64 },

    #[returns(Binary)]
    RemoteToken { remote_chain_selector: u64 },

    /// Inbound bucket refilled to the current block time
    #[returns(TokenBucket)]
    CurrentInboundRateLimiterState { remote_chain_selector: u64 },

    /// Outbound bucket refilled to the current block time
    #[returns(TokenBucket)]
    CurrentOutboundRateLimiterState { remote_chain_selector: u64 },

    // ========================================================================
    // Liquidity Queries
    // ========================================================================
    #[returns(Option<Addr>)]
    Rebalancer {},

    #[returns(bool)]
    CanAcceptLiquidity {},
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct PoolConfigResponse {
    pub token: Addr,
    pub pool_kind: PoolKind,
    pub allow_list_enabled: bool,
    pub accept_liquidity: bool,
    pub rebalancer: Option<Addr>,
    pub router: Addr,
    pub rmn_proxy: Addr,
}

#[cw_serde]
pub struct TypeAndVersionResponse {
    pub type_and_version: String,
}

#[cw_serde]
pub struct OwnershipResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
}

#[cw_serde]
pub struct ChainResponse {
    pub remote_chain_selector: u64,
    pub allowed: bool,
    pub remote_pool_address: Binary,
    pub remote_token_address: Binary,
    pub outbound_rate_limiter_config: RateLimiterConfig,
    pub inbound_rate_limiter_config: RateLimiterConfig,
}
