//! Token Pool Contract - Cross-Chain Token Custody for CosmWasm
//!
//! A token pool moves one CW20 token in and out of a cross-chain transfer
//! network. Ramps authorized by the router call the pool; the pool checks the
//! risk management network, the remote chain registry and the sender
//! allowlist before touching tokens.
//!
//! # Outgoing Flow (LockOrBurn)
//! 1. The on-ramp transfers the user's tokens to the pool
//! 2. The pool admits the transfer and consumes the outbound rate limit
//! 3. Burn/mint pools burn the tokens, lock/release pools keep them
//!
//! # Incoming Flow (ReleaseOrMint)
//! 1. An off-ramp delivers a message from the registered remote pool
//! 2. The pool admits the transfer and consumes the inbound rate limit
//! 3. Burn/mint pools mint to the receiver, lock/release pools transfer out
//!
//! # Rate Limiting
//! Each remote chain has an outbound and an inbound token bucket that refills
//! continuously at `rate` tokens per second up to `capacity`.

pub mod admission;
pub mod allowlist;
pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod msg;
mod query;
pub mod rate_limiter;
pub mod registry;
pub mod state;

pub use crate::error::ContractError;
pub use crate::events::PoolEvent;
pub use crate::rate_limiter::{RateLimitError, RateLimiterConfig, TokenBucket};
