//! Admission checks run before any transfer touches pool state.
//!
//! Checks short-circuit in a fixed order: the caller must be the ramp the
//! router authorizes for the chain, the RMN must not curse the chain, the
//! chain must be registered and allowed, and for outgoing transfers the
//! original sender must pass the allowlist.

use common::{IsCursedResponse, IsOffRampResponse, OnRampResponse, RmnQueryMsg, RouterQueryMsg};
use cosmwasm_std::{Addr, Api, Deps};

use crate::error::ContractError;
use crate::msg::{LockOrBurnIn, ReleaseOrMintIn};
use crate::state::{AdminContext, Config, RemoteChainConfig, ALLOW_LIST, CHAINS};

/// Validate an address that must be present.
pub fn nonzero_addr(api: &dyn Api, addr: &str) -> Result<Addr, ContractError> {
    if addr.trim().is_empty() {
        return Err(ContractError::ZeroAddressNotAllowed);
    }
    Ok(api.addr_validate(addr)?)
}

/// Outgoing transfer admitted by the guard
#[derive(Debug)]
pub struct AdmittedLockOrBurn {
    pub original_sender: Addr,
    pub chain: RemoteChainConfig,
}

/// Incoming transfer admitted by the guard
#[derive(Debug)]
pub struct AdmittedReleaseOrMint {
    pub receiver: Addr,
    pub chain: RemoteChainConfig,
}

fn check_token(config: &Config, local_token: &str) -> Result<(), ContractError> {
    if config.token.as_str() != local_token {
        return Err(ContractError::InvalidToken {
            token: local_token.to_string(),
        });
    }
    Ok(())
}

fn check_not_cursed(
    deps: Deps,
    ctx: &AdminContext,
    remote_chain_selector: u64,
) -> Result<(), ContractError> {
    let response: IsCursedResponse = deps.querier.query_wasm_smart(
        &ctx.rmn_proxy,
        &RmnQueryMsg::IsCursed {
            subject: remote_chain_selector,
        },
    )?;
    if response.cursed {
        return Err(ContractError::CursedByRMN);
    }
    Ok(())
}

/// Load a chain that is registered and currently allowed.
fn allowed_chain(
    deps: Deps,
    remote_chain_selector: u64,
) -> Result<RemoteChainConfig, ContractError> {
    match CHAINS.may_load(deps.storage, remote_chain_selector)? {
        Some(chain) if chain.allowed => Ok(chain),
        _ => Err(ContractError::ChainNotAllowed {
            remote_chain_selector,
        }),
    }
}

/// Whether `sender` passes the allowlist gate.
pub fn is_sender_allowed(
    deps: Deps,
    config: &Config,
    sender: &Addr,
) -> Result<bool, ContractError> {
    if !config.allow_list_enabled {
        return Ok(true);
    }
    Ok(ALLOW_LIST.has(deps.storage, sender))
}

/// Run every check for an outgoing transfer.
pub fn check_lock_or_burn(
    deps: Deps,
    ctx: &AdminContext,
    config: &Config,
    caller: &Addr,
    input: &LockOrBurnIn,
) -> Result<AdmittedLockOrBurn, ContractError> {
    check_token(config, &input.local_token)?;
    let original_sender = nonzero_addr(deps.api, &input.original_sender)?;

    let on_ramp: OnRampResponse = deps.querier.query_wasm_smart(
        &ctx.router,
        &RouterQueryMsg::OnRamp {
            dest_chain_selector: input.remote_chain_selector,
        },
    )?;
    if on_ramp.on_ramp.as_ref() != Some(caller) {
        return Err(ContractError::CallerIsNotARampOnRouter {
            caller: caller.clone(),
        });
    }

    check_not_cursed(deps, ctx, input.remote_chain_selector)?;
    let chain = allowed_chain(deps, input.remote_chain_selector)?;

    if !is_sender_allowed(deps, config, &original_sender)? {
        return Err(ContractError::SenderNotAllowed {
            sender: original_sender.to_string(),
        });
    }

    Ok(AdmittedLockOrBurn {
        original_sender,
        chain,
    })
}

/// Run every check for an incoming transfer. The allowlist does not apply.
pub fn check_release_or_mint(
    deps: Deps,
    ctx: &AdminContext,
    config: &Config,
    caller: &Addr,
    input: &ReleaseOrMintIn,
) -> Result<AdmittedReleaseOrMint, ContractError> {
    check_token(config, &input.local_token)?;
    let receiver = nonzero_addr(deps.api, &input.receiver)?;

    let off_ramp: IsOffRampResponse = deps.querier.query_wasm_smart(
        &ctx.router,
        &RouterQueryMsg::IsOffRamp {
            source_chain_selector: input.remote_chain_selector,
            off_ramp: caller.to_string(),
        },
    )?;
    if !off_ramp.is_off_ramp {
        return Err(ContractError::CallerIsNotARampOnRouter {
            caller: caller.clone(),
        });
    }

    check_not_cursed(deps, ctx, input.remote_chain_selector)?;
    let chain = allowed_chain(deps, input.remote_chain_selector)?;

    Ok(AdmittedReleaseOrMint { receiver, chain })
}
