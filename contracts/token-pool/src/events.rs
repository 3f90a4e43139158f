//! Domain events emitted by the pool.
//!
//! Core operations return the events they produced instead of writing them to
//! the response themselves; the entry points turn them into CosmWasm events.
//! Attribute keys are stable: off-chain observers index on them.

use cosmwasm_std::{Addr, Binary, Event, Uint128};

use crate::rate_limiter::RateLimiterConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum PoolEvent {
    ChainAdded {
        remote_chain_selector: u64,
        remote_token: Binary,
        outbound: RateLimiterConfig,
        inbound: RateLimiterConfig,
    },
    ChainConfigured {
        remote_chain_selector: u64,
        outbound: RateLimiterConfig,
        inbound: RateLimiterConfig,
    },
    ChainRemoved {
        remote_chain_selector: u64,
    },
    /// A bucket took a new config
    ConfigChanged {
        config: RateLimiterConfig,
    },
    RemotePoolSet {
        remote_chain_selector: u64,
        previous_pool_address: Binary,
        remote_pool_address: Binary,
    },
    AllowListAdd {
        sender: Addr,
    },
    AllowListRemove {
        sender: Addr,
    },
    Locked {
        sender: Addr,
        amount: Uint128,
    },
    Burned {
        sender: Addr,
        amount: Uint128,
    },
    Released {
        sender: Addr,
        recipient: Addr,
        amount: Uint128,
    },
    Minted {
        sender: Addr,
        recipient: Addr,
        amount: Uint128,
    },
    /// Level left in the bucket after a tracked consume
    TokensConsumed {
        tokens: Uint128,
    },
    RouterUpdated {
        old_router: Addr,
        new_router: Addr,
    },
    LiquidityAdded {
        provider: Addr,
        amount: Uint128,
    },
    LiquidityRemoved {
        provider: Addr,
        amount: Uint128,
    },
    LiquidityTransferred {
        from: Addr,
        amount: Uint128,
    },
    OwnershipTransferRequested {
        from: Addr,
        to: Addr,
    },
    OwnershipTransferred {
        from: Addr,
        to: Addr,
    },
}

impl PoolEvent {
    /// Event type as it appears in the transaction log
    pub fn name(&self) -> &'static str {
        match self {
            PoolEvent::ChainAdded { .. } => "chain_added",
            PoolEvent::ChainConfigured { .. } => "chain_configured",
            PoolEvent::ChainRemoved { .. } => "chain_removed",
            PoolEvent::ConfigChanged { .. } => "config_changed",
            PoolEvent::RemotePoolSet { .. } => "remote_pool_set",
            PoolEvent::AllowListAdd { .. } => "allow_list_add",
            PoolEvent::AllowListRemove { .. } => "allow_list_remove",
            PoolEvent::Locked { .. } => "locked",
            PoolEvent::Burned { .. } => "burned",
            PoolEvent::Released { .. } => "released",
            PoolEvent::Minted { .. } => "minted",
            PoolEvent::TokensConsumed { .. } => "tokens_consumed",
            PoolEvent::RouterUpdated { .. } => "router_updated",
            PoolEvent::LiquidityAdded { .. } => "liquidity_added",
            PoolEvent::LiquidityRemoved { .. } => "liquidity_removed",
            PoolEvent::LiquidityTransferred { .. } => "liquidity_transferred",
            PoolEvent::OwnershipTransferRequested { .. } => "ownership_transfer_requested",
            PoolEvent::OwnershipTransferred { .. } => "ownership_transferred",
        }
    }
}

fn with_config(event: Event, prefix: &str, config: &RateLimiterConfig) -> Event {
    event
        .add_attribute(format!("{prefix}_enabled"), config.is_enabled.to_string())
        .add_attribute(format!("{prefix}_capacity"), config.capacity.to_string())
        .add_attribute(format!("{prefix}_rate"), config.rate.to_string())
}

impl From<PoolEvent> for Event {
    fn from(pool_event: PoolEvent) -> Self {
        let event = Event::new(pool_event.name());
        match pool_event {
            PoolEvent::ChainAdded {
                remote_chain_selector,
                remote_token,
                outbound,
                inbound,
            } => {
                let event = event
                    .add_attribute("remote_chain_selector", remote_chain_selector.to_string())
                    .add_attribute("remote_token", remote_token.to_base64());
                let event = with_config(event, "outbound", &outbound);
                with_config(event, "inbound", &inbound)
            }
            PoolEvent::ChainConfigured {
                remote_chain_selector,
                outbound,
                inbound,
            } => {
                let event = event
                    .add_attribute("remote_chain_selector", remote_chain_selector.to_string());
                let event = with_config(event, "outbound", &outbound);
                with_config(event, "inbound", &inbound)
            }
            PoolEvent::ChainRemoved {
                remote_chain_selector,
            } => event.add_attribute("remote_chain_selector", remote_chain_selector.to_string()),
            PoolEvent::ConfigChanged { config } => with_config(event, "config", &config),
            PoolEvent::RemotePoolSet {
                remote_chain_selector,
                previous_pool_address,
                remote_pool_address,
            } => event
                .add_attribute("remote_chain_selector", remote_chain_selector.to_string())
                .add_attribute("previous_pool_address", previous_pool_address.to_base64())
                .add_attribute("remote_pool_address", remote_pool_address.to_base64()),
            PoolEvent::AllowListAdd { sender } | PoolEvent::AllowListRemove { sender } => {
                event.add_attribute("sender", sender)
            }
            PoolEvent::Locked { sender, amount } | PoolEvent::Burned { sender, amount } => event
                .add_attribute("sender", sender)
                .add_attribute("amount", amount.to_string()),
            PoolEvent::Released {
                sender,
                recipient,
                amount,
            }
            | PoolEvent::Minted {
                sender,
                recipient,
                amount,
            } => event
                .add_attribute("sender", sender)
                .add_attribute("recipient", recipient)
                .add_attribute("amount", amount.to_string()),
            PoolEvent::TokensConsumed { tokens } => {
                event.add_attribute("tokens", tokens.to_string())
            }
            PoolEvent::RouterUpdated {
                old_router,
                new_router,
            } => event
                .add_attribute("old_router", old_router)
                .add_attribute("new_router", new_router),
            PoolEvent::LiquidityAdded { provider, amount }
            | PoolEvent::LiquidityRemoved { provider, amount } => event
                .add_attribute("provider", provider)
                .add_attribute("amount", amount.to_string()),
            PoolEvent::LiquidityTransferred { from, amount } => event
                .add_attribute("from", from)
                .add_attribute("amount", amount.to_string()),
            PoolEvent::OwnershipTransferRequested { from, to }
            | PoolEvent::OwnershipTransferred { from, to } => {
                event.add_attribute("from", from).add_attribute("to", to)
            }
        }
    }
}

/// Convert a batch of domain events for `Response::add_events`.
pub fn into_events(events: Vec<PoolEvent>) -> Vec<Event> {
    events.into_iter().map(Event::from).collect()
}
