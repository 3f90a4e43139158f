//! Chain registry and allowlist handlers.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response};

use super::only_owner;
use crate::allowlist::apply_allow_list_updates;
use crate::error::ContractError;
use crate::events::into_events;
use crate::msg::ChainUpdate;
use crate::rate_limiter::RateLimiterConfig;
use crate::registry::{apply_chain_updates, set_chain_rate_limiter_config, set_remote_pool};
use crate::state::ADMIN;

// ============================================================================
// Chain Registry
// ============================================================================

/// Add, update or remove remote chains.
pub fn execute_apply_chain_updates(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    chains: Vec<ChainUpdate>,
) -> Result<Response, ContractError> {
    let ctx = ADMIN.load(deps.storage)?;
    only_owner(&ctx, &info.sender)?;

    let count = chains.len();
    let events = apply_chain_updates(deps.storage, env.block.time.seconds(), chains)?;

    Ok(Response::new()
        .add_events(into_events(events))
        .add_attribute("method", "apply_chain_updates")
        .add_attribute("updates", count.to_string()))
}

/// Reconfigure both buckets of a chain. The owner and the rate limit admin
/// may both call this.
pub fn execute_set_chain_rate_limiter_config(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    remote_chain_selector: u64,
    outbound_config: RateLimiterConfig,
    inbound_config: RateLimiterConfig,
) -> Result<Response, ContractError> {
    let ctx = ADMIN.load(deps.storage)?;
    if !ctx.can_set_rate_limits(&info.sender) {
        return Err(ContractError::Unauthorized {
            caller: info.sender,
        });
    }

    let events = set_chain_rate_limiter_config(
        deps.storage,
        env.block.time.seconds(),
        remote_chain_selector,
        &outbound_config,
        &inbound_config,
    )?;

    Ok(Response::new()
        .add_events(into_events(events))
        .add_attribute("method", "set_chain_rate_limiter_config")
        .add_attribute("remote_chain_selector", remote_chain_selector.to_string()))
}

/// Rebind the counterpart pool of a chain.
pub fn execute_set_remote_pool(
    deps: DepsMut,
    info: MessageInfo,
    remote_chain_selector: u64,
    remote_pool_address: Binary,
) -> Result<Response, ContractError> {
    let ctx = ADMIN.load(deps.storage)?;
    only_owner(&ctx, &info.sender)?;

    let events = set_remote_pool(deps.storage, remote_chain_selector, remote_pool_address)?;

    Ok(Response::new()
        .add_events(into_events(events))
        .add_attribute("method", "set_remote_pool")
        .add_attribute("remote_chain_selector", remote_chain_selector.to_string()))
}

// ============================================================================
// Allowlist
// ============================================================================

/// Edit allowlist membership. Works whether or not the gate is enabled.
pub fn execute_apply_allow_list_updates(
    deps: DepsMut,
    info: MessageInfo,
    removes: Vec<String>,
    adds: Vec<String>,
) -> Result<Response, ContractError> {
    let ctx = ADMIN.load(deps.storage)?;
    only_owner(&ctx, &info.sender)?;

    let events = apply_allow_list_updates(deps.storage, deps.api, removes, adds)?;

    Ok(Response::new()
        .add_events(into_events(events))
        .add_attribute("method", "apply_allow_list_updates"))
}
