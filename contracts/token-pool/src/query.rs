//! Query handlers for the token pool contract.
//!
//! Rate limiter views are refilled to the block time of the query and never
//! write back.

use cosmwasm_std::{Addr, Binary, Deps, Env, Order, StdError, StdResult};

use crate::allowlist::members;
use crate::error::ContractError;
use crate::msg::{ChainResponse, OwnershipResponse, PoolConfigResponse, TypeAndVersionResponse};
use crate::rate_limiter::TokenBucket;
use crate::registry::load_chain;
use crate::state::{
    PoolKind, RemoteChainConfig, ADMIN, ALLOW_LIST, CHAINS, CONFIG, CONTRACT_VERSION,
};

fn std_err(err: ContractError) -> StdError {
    match err {
        ContractError::Std(err) => err,
        other => StdError::generic_err(other.to_string()),
    }
}

fn registered_chain(deps: Deps, remote_chain_selector: u64) -> StdResult<RemoteChainConfig> {
    load_chain(deps.storage, remote_chain_selector).map_err(std_err)
}

// ============================================================================
// Pool Queries
// ============================================================================

pub fn query_pool_config(deps: Deps) -> StdResult<PoolConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let ctx = ADMIN.load(deps.storage)?;
    Ok(PoolConfigResponse {
        token: config.token,
        pool_kind: config.pool_kind,
        allow_list_enabled: config.allow_list_enabled,
        accept_liquidity: config.accept_liquidity,
        rebalancer: config.rebalancer,
        router: ctx.router,
        rmn_proxy: ctx.rmn_proxy,
    })
}

/// e.g. `BurnMintTokenPool 0.1.0`
pub fn query_type_and_version(deps: Deps) -> StdResult<TypeAndVersionResponse> {
    let config = CONFIG.load(deps.storage)?;
    let kind = match config.pool_kind {
        PoolKind::BurnMint => "BurnMintTokenPool",
        PoolKind::LockRelease => "LockReleaseTokenPool",
    };
    Ok(TypeAndVersionResponse {
        type_and_version: format!("{kind} {CONTRACT_VERSION}"),
    })
}

pub fn query_token(deps: Deps) -> StdResult<Addr> {
    Ok(CONFIG.load(deps.storage)?.token)
}

pub fn query_is_supported_token(deps: Deps, token: String) -> StdResult<bool> {
    Ok(CONFIG.load(deps.storage)?.token.as_str() == token)
}

pub fn query_ownership(deps: Deps) -> StdResult<OwnershipResponse> {
    let ctx = ADMIN.load(deps.storage)?;
    Ok(OwnershipResponse {
        owner: ctx.owner,
        pending_owner: ctx.pending_owner,
    })
}

pub fn query_router(deps: Deps) -> StdResult<Addr> {
    Ok(ADMIN.load(deps.storage)?.router)
}

pub fn query_rmn_proxy(deps: Deps) -> StdResult<Addr> {
    Ok(ADMIN.load(deps.storage)?.rmn_proxy)
}

pub fn query_rate_limit_admin(deps: Deps) -> StdResult<Option<Addr>> {
    Ok(ADMIN.load(deps.storage)?.rate_limit_admin)
}

// ============================================================================
// Allowlist Queries
// ============================================================================

pub fn query_allow_list(deps: Deps) -> StdResult<Vec<Addr>> {
    members(deps.storage)
}

pub fn query_allow_list_enabled(deps: Deps) -> StdResult<bool> {
    Ok(CONFIG.load(deps.storage)?.allow_list_enabled)
}

/// Membership only means something while the gate is on.
pub fn query_is_allow_listed(deps: Deps, sender: String) -> StdResult<bool> {
    let config = CONFIG.load(deps.storage)?;
    if !config.allow_list_enabled {
        return Err(std_err(ContractError::AllowListNotEnabled));
    }
    let sender = deps.api.addr_validate(&sender)?;
    Ok(ALLOW_LIST.has(deps.storage, &sender))
}

// ============================================================================
// Chain Queries
// ============================================================================

/// Registered selectors in ascending order, allowed or not.
pub fn query_supported_chains(deps: Deps) -> StdResult<Vec<u64>> {
    CHAINS
        .keys(deps.storage, None, None, Order::Ascending)
        .collect()
}

pub fn query_is_supported_chain(deps: Deps, remote_chain_selector: u64) -> StdResult<bool> {
    Ok(CHAINS.has(deps.storage, remote_chain_selector))
}

pub fn query_chain(deps: Deps, remote_chain_selector: u64) -> StdResult<ChainResponse> {
    let chain = registered_chain(deps, remote_chain_selector)?;
    Ok(ChainResponse {
        remote_chain_selector,
        allowed: chain.allowed,
        remote_pool_address: chain.remote_pool_address,
        remote_token_address: chain.remote_token_address,
        outbound_rate_limiter_config: chain.outbound.config(),
        inbound_rate_limiter_config: chain.inbound.config(),
    })
}

pub fn query_remote_pool(deps: Deps, remote_chain_selector: u64) -> StdResult<Binary> {
    Ok(registered_chain(deps, remote_chain_selector)?.remote_pool_address)
}

pub fn query_remote_token(deps: Deps, remote_chain_selector: u64) -> StdResult<Binary> {
    Ok(registered_chain(deps, remote_chain_selector)?.remote_token_address)
}

pub fn query_current_inbound_state(
    deps: Deps,
    env: Env,
    remote_chain_selector: u64,
) -> StdResult<TokenBucket> {
    let chain = registered_chain(deps, remote_chain_selector)?;
    Ok(chain.inbound.current_state(env.block.time.seconds()))
}

pub fn query_current_outbound_state(
    deps: Deps,
    env: Env,
    remote_chain_selector: u64,
) -> StdResult<TokenBucket> {
    let chain = registered_chain(deps, remote_chain_selector)?;
    Ok(chain.outbound.current_state(env.block.time.seconds()))
}

// ============================================================================
// Liquidity Queries
// ============================================================================

pub fn query_rebalancer(deps: Deps) -> StdResult<Option<Addr>> {
    Ok(CONFIG.load(deps.storage)?.rebalancer)
}

pub fn query_can_accept_liquidity(deps: Deps) -> StdResult<bool> {
    Ok(CONFIG.load(deps.storage)?.accept_liquidity)
}
