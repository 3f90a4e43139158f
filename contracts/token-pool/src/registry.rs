//! Remote chain registry.
//!
//! Owns the per-chain records and the lifecycle of their buckets:
//! `Unregistered → Registered → [reconfigure]* → Disabled → Unregistered`.
//! Every mutation returns the events it produced. A failing operation leaves
//! its message reverted as a whole, so partial batches are never committed.

use cosmwasm_std::{Binary, Storage};

use crate::error::ContractError;
use crate::events::PoolEvent;
use crate::msg::ChainUpdate;
use crate::rate_limiter::{RateLimiterConfig, TokenBucket};
use crate::state::{RemoteChainConfig, CHAINS};

/// Load a registered chain.
pub fn load_chain(
    storage: &dyn Storage,
    remote_chain_selector: u64,
) -> Result<RemoteChainConfig, ContractError> {
    CHAINS
        .may_load(storage, remote_chain_selector)?
        .ok_or(ContractError::NonExistentChain {
            remote_chain_selector,
        })
}

fn is_removal(update: &ChainUpdate) -> bool {
    !update.allowed && update.remote_pool_address.is_empty()
}

fn require_addresses(update: &ChainUpdate) -> Result<(), ContractError> {
    if update.allowed
        && (update.remote_pool_address.is_empty() || update.remote_token_address.is_empty())
    {
        return Err(ContractError::ZeroAddressNotAllowed);
    }
    Ok(())
}

/// Add, update or remove remote chains, in order. The first failing update
/// fails the whole batch.
pub fn apply_chain_updates(
    storage: &mut dyn Storage,
    now: u64,
    updates: Vec<ChainUpdate>,
) -> Result<Vec<PoolEvent>, ContractError> {
    let mut events = vec![];

    for update in updates {
        let selector = update.remote_chain_selector;
        let existing = CHAINS.may_load(storage, selector)?;

        if is_removal(&update) {
            let chain = existing.ok_or(ContractError::NonExistentChain {
                remote_chain_selector: selector,
            })?;
            if update.outbound_rate_limiter_config.is_enabled
                || update.inbound_rate_limiter_config.is_enabled
                || chain.outbound.is_enabled
                || chain.inbound.is_enabled
            {
                return Err(ContractError::RateLimitMustBeDisabled);
            }
            CHAINS.remove(storage, selector);
            events.push(PoolEvent::ChainRemoved {
                remote_chain_selector: selector,
            });
            continue;
        }

        require_addresses(&update)?;

        match existing {
            None => {
                let chain = RemoteChainConfig {
                    remote_chain_selector: selector,
                    allowed: update.allowed,
                    remote_pool_address: update.remote_pool_address,
                    remote_token_address: update.remote_token_address.clone(),
                    outbound: TokenBucket::new(&update.outbound_rate_limiter_config, now)?,
                    inbound: TokenBucket::new(&update.inbound_rate_limiter_config, now)?,
                };
                CHAINS.save(storage, selector, &chain)?;
                events.push(PoolEvent::ChainAdded {
                    remote_chain_selector: selector,
                    remote_token: update.remote_token_address,
                    outbound: update.outbound_rate_limiter_config,
                    inbound: update.inbound_rate_limiter_config,
                });
            }
            Some(_) if update.add_only => {
                return Err(ContractError::ChainAlreadyExists {
                    chain_selector: selector,
                });
            }
            Some(mut chain) => {
                chain.allowed = update.allowed;
                chain.remote_token_address = update.remote_token_address;
                if chain.remote_pool_address != update.remote_pool_address {
                    events.push(PoolEvent::RemotePoolSet {
                        remote_chain_selector: selector,
                        previous_pool_address: chain.remote_pool_address.clone(),
                        remote_pool_address: update.remote_pool_address.clone(),
                    });
                    chain.remote_pool_address = update.remote_pool_address;
                }
                events.extend(reconfigure_buckets(
                    &mut chain,
                    &update.outbound_rate_limiter_config,
                    &update.inbound_rate_limiter_config,
                    now,
                )?);
                CHAINS.save(storage, selector, &chain)?;
            }
        }
    }

    Ok(events)
}

/// Reconfigure both buckets of a chain record, preserving accumulated fill.
fn reconfigure_buckets(
    chain: &mut RemoteChainConfig,
    outbound: &RateLimiterConfig,
    inbound: &RateLimiterConfig,
    now: u64,
) -> Result<Vec<PoolEvent>, ContractError> {
    chain.outbound.set_config(outbound, now)?;
    chain.inbound.set_config(inbound, now)?;
    Ok(vec![
        PoolEvent::ConfigChanged {
            config: outbound.clone(),
        },
        PoolEvent::ConfigChanged {
            config: inbound.clone(),
        },
        PoolEvent::ChainConfigured {
            remote_chain_selector: chain.remote_chain_selector,
            outbound: outbound.clone(),
            inbound: inbound.clone(),
        },
    ])
}

/// Reconfigure the rate limiters of a registered chain.
pub fn set_chain_rate_limiter_config(
    storage: &mut dyn Storage,
    now: u64,
    remote_chain_selector: u64,
    outbound: &RateLimiterConfig,
    inbound: &RateLimiterConfig,
) -> Result<Vec<PoolEvent>, ContractError> {
    let mut chain = load_chain(storage, remote_chain_selector)?;
    let events = reconfigure_buckets(&mut chain, outbound, inbound, now)?;
    CHAINS.save(storage, remote_chain_selector, &chain)?;
    Ok(events)
}

/// Rebind the counterpart pool of a registered chain. Buckets are untouched.
pub fn set_remote_pool(
    storage: &mut dyn Storage,
    remote_chain_selector: u64,
    remote_pool_address: Binary,
) -> Result<Vec<PoolEvent>, ContractError> {
    if remote_pool_address.is_empty() {
        return Err(ContractError::ZeroAddressNotAllowed);
    }
    let mut chain = load_chain(storage, remote_chain_selector)?;
    let previous_pool_address =
        std::mem::replace(&mut chain.remote_pool_address, remote_pool_address.clone());
    CHAINS.save(storage, remote_chain_selector, &chain)?;

    Ok(vec![PoolEvent::RemotePoolSet {
        remote_chain_selector,
        previous_pool_address,
        remote_pool_address,
    }])
}
