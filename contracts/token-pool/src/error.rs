//! Error types for the token pool contract

use cosmwasm_std::{Addr, Binary, StdError};
use thiserror::Error;

use crate::rate_limiter::RateLimitError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Bucket arithmetic and rate limit configuration errors
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Only callable by owner")]
    OnlyCallableByOwner,

    #[error("Unauthorized caller: {caller}")]
    Unauthorized { caller: Addr },

    #[error("Must be proposed owner")]
    MustBeProposedOwner,

    #[error("Cannot transfer ownership to self")]
    CannotTransferToSelf,

    // ========================================================================
    // Admission Errors
    // ========================================================================

    #[error("Caller is not a ramp on router: {caller}")]
    CallerIsNotARampOnRouter { caller: Addr },

    #[error("Cursed by RMN")]
    CursedByRMN,

    #[error("Chain not allowed: {remote_chain_selector}")]
    ChainNotAllowed { remote_chain_selector: u64 },

    #[error("Sender not allowed: {sender}")]
    SenderNotAllowed { sender: String },

    #[error("Zero address not allowed")]
    ZeroAddressNotAllowed,

    #[error("Invalid token: {token}")]
    InvalidToken { token: String },

    // ========================================================================
    // Chain Registry Errors
    // ========================================================================

    #[error("Chain already exists: {chain_selector}")]
    ChainAlreadyExists { chain_selector: u64 },

    #[error("Non-existent chain: {remote_chain_selector}")]
    NonExistentChain { remote_chain_selector: u64 },

    #[error("Rate limit must be disabled")]
    RateLimitMustBeDisabled,

    #[error("Invalid source pool address: {source_pool_address:?}")]
    InvalidSourcePoolAddress { source_pool_address: Binary },

    #[error("Allow list not enabled")]
    AllowListNotEnabled,

    // ========================================================================
    // Liquidity Errors
    // ========================================================================

    #[error("Liquidity not accepted")]
    LiquidityNotAccepted,

    #[error("Insufficient liquidity")]
    InsufficientLiquidity,

    #[error("Liquidity management requires a lock/release pool")]
    LiquidityNotSupported,
}
