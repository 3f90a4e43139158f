//! Execute handlers for the token pool contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `transfer` - LockOrBurn and ReleaseOrMint, called by the ramps
//! - `config` - Chain registry, rate limiter and allowlist management
//! - `admin` - Ownership, router and rate limit admin
//! - `liquidity` - Liquidity management for lock/release pools

mod admin;
mod config;
mod liquidity;
mod transfer;

pub use admin::*;
pub use config::*;
pub use liquidity::*;
pub use transfer::*;

use cosmwasm_std::Addr;

use crate::error::ContractError;
use crate::state::AdminContext;

fn only_owner(ctx: &AdminContext, sender: &Addr) -> Result<(), ContractError> {
    if !ctx.is_owner(sender) {
        return Err(ContractError::OnlyCallableByOwner);
    }
    Ok(())
}
