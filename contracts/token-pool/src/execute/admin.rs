//! Admin operations handlers.
//!
//! This module handles:
//! - Router and rate limit admin updates
//! - Ownership transfer (propose/accept)

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use super::only_owner;
use crate::admission::nonzero_addr;
use crate::error::ContractError;
use crate::events::{into_events, PoolEvent};
use crate::state::ADMIN;

// ============================================================================
// Collaborators
// ============================================================================

/// Point the pool at a new router.
pub fn execute_set_router(
    deps: DepsMut,
    info: MessageInfo,
    new_router: String,
) -> Result<Response, ContractError> {
    let mut ctx = ADMIN.load(deps.storage)?;
    only_owner(&ctx, &info.sender)?;

    let new_router = nonzero_addr(deps.api, &new_router)?;
    let old_router = std::mem::replace(&mut ctx.router, new_router.clone());
    ADMIN.save(deps.storage, &ctx)?;

    Ok(Response::new()
        .add_events(into_events(vec![PoolEvent::RouterUpdated {
            old_router,
            new_router: new_router.clone(),
        }]))
        .add_attribute("method", "set_router")
        .add_attribute("new_router", new_router))
}

/// Set the rate limit admin. An empty address clears it.
pub fn execute_set_rate_limit_admin(
    deps: DepsMut,
    info: MessageInfo,
    rate_limit_admin: String,
) -> Result<Response, ContractError> {
    let mut ctx = ADMIN.load(deps.storage)?;
    only_owner(&ctx, &info.sender)?;

    ctx.rate_limit_admin = if rate_limit_admin.trim().is_empty() {
        None
    } else {
        Some(deps.api.addr_validate(&rate_limit_admin)?)
    };
    ADMIN.save(deps.storage, &ctx)?;

    Ok(Response::new()
        .add_attribute("method", "set_rate_limit_admin")
        .add_attribute(
            "rate_limit_admin",
            ctx.rate_limit_admin
                .map(|a| a.to_string())
                .unwrap_or_default(),
        ))
}

// ============================================================================
// Ownership Transfer
// ============================================================================

/// Propose a new owner. Takes effect once the proposed owner accepts.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
) -> Result<Response, ContractError> {
    let mut ctx = ADMIN.load(deps.storage)?;
    only_owner(&ctx, &info.sender)?;

    let to = nonzero_addr(deps.api, &to)?;
    if to == info.sender {
        return Err(ContractError::CannotTransferToSelf);
    }
    ctx.pending_owner = Some(to.clone());
    ADMIN.save(deps.storage, &ctx)?;

    Ok(Response::new()
        .add_events(into_events(vec![PoolEvent::OwnershipTransferRequested {
            from: info.sender,
            to: to.clone(),
        }]))
        .add_attribute("method", "transfer_ownership")
        .add_attribute("pending_owner", to))
}

/// Accept a pending ownership proposal.
pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut ctx = ADMIN.load(deps.storage)?;
    if ctx.pending_owner.as_ref() != Some(&info.sender) {
        return Err(ContractError::MustBeProposedOwner);
    }

    let from = std::mem::replace(&mut ctx.owner, info.sender.clone());
    ctx.pending_owner = None;
    ADMIN.save(deps.storage, &ctx)?;

    Ok(Response::new()
        .add_events(into_events(vec![PoolEvent::OwnershipTransferred {
            from,
            to: info.sender.clone(),
        }]))
        .add_attribute("method", "accept_ownership")
        .add_attribute("owner", info.sender))
}
