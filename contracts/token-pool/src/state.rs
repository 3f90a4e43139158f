//! State definitions for the token pool contract
//!
//! This module defines the storage layout: the pool configuration, the
//! administrative context, the remote chain registry and the sender allowlist.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Empty};
use cw_storage_plus::{Item, Map};

use crate::rate_limiter::TokenBucket;

// ============================================================================
// Core Configuration
// ============================================================================

/// How the pool moves the local token
#[cw_serde]
pub enum PoolKind {
    /// Burns on the way out, mints on the way in (pool is the token minter)
    BurnMint,
    /// Holds tokens on the way out, releases them on the way in
    LockRelease,
}

impl PoolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolKind::BurnMint => "burn_mint",
            PoolKind::LockRelease => "lock_release",
        }
    }
}

/// Pool configuration
#[cw_serde]
pub struct Config {
    /// CW20 token this pool bridges
    pub token: Addr,
    /// Burn/mint or lock/release behavior
    pub pool_kind: PoolKind,
    /// Whether outgoing senders are checked against the allowlist
    pub allow_list_enabled: bool,
    /// Whether the rebalancer may provide liquidity (lock/release only)
    pub accept_liquidity: bool,
    /// Liquidity manager for lock/release pools
    pub rebalancer: Option<Addr>,
}

/// Addresses allowed to administer the pool and the collaborators it trusts.
///
/// Loaded once per message and handed to every admin and transfer operation.
#[cw_serde]
pub struct AdminContext {
    pub owner: Addr,
    /// Proposed owner waiting to accept
    pub pending_owner: Option<Addr>,
    /// Router deciding which ramps may call the pool
    pub router: Addr,
    /// Risk management network proxy
    pub rmn_proxy: Addr,
    /// May reconfigure rate limits in addition to the owner
    pub rate_limit_admin: Option<Addr>,
}

impl AdminContext {
    pub fn is_owner(&self, addr: &Addr) -> bool {
        &self.owner == addr
    }

    pub fn can_set_rate_limits(&self, addr: &Addr) -> bool {
        self.is_owner(addr) || self.rate_limit_admin.as_ref() == Some(addr)
    }
}

/// Registered remote chain
#[cw_serde]
pub struct RemoteChainConfig {
    pub remote_chain_selector: u64,
    /// Whether transfers with this chain are currently admitted
    pub allowed: bool,
    /// Counterpart pool on the remote chain; authenticates incoming releases
    pub remote_pool_address: Binary,
    /// Token address on the remote chain
    pub remote_token_address: Binary,
    /// Limits lock/burn towards the remote chain
    pub outbound: TokenBucket,
    /// Limits release/mint from the remote chain
    pub inbound: TokenBucket,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:token-pool";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

/// Pool configuration
pub const CONFIG: Item<Config> = Item::new("config");

/// Owner, router, RMN and rate limit admin
pub const ADMIN: Item<AdminContext> = Item::new("admin");

/// Remote chain registry
/// Key: remote chain selector, Value: RemoteChainConfig
pub const CHAINS: Map<u64, RemoteChainConfig> = Map::new("chains");

/// Senders allowed to bridge out while the allowlist is enabled
pub const ALLOW_LIST: Map<&Addr, Empty> = Map::new("allow_list");
