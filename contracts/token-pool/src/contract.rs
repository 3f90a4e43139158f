//! Token Pool Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::admission::nonzero_addr;
use crate::error::ContractError;
use crate::execute::{
    execute_accept_ownership, execute_apply_allow_list_updates, execute_apply_chain_updates,
    execute_lock_or_burn, execute_receive, execute_release_or_mint,
    execute_set_chain_rate_limiter_config, execute_set_rate_limit_admin, execute_set_rebalancer,
    execute_set_remote_pool, execute_set_router, execute_transfer_liquidity,
    execute_transfer_ownership, execute_withdraw_liquidity,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_allow_list, query_allow_list_enabled, query_can_accept_liquidity, query_chain,
    query_current_inbound_state, query_current_outbound_state, query_is_allow_listed,
    query_is_supported_chain, query_is_supported_token, query_ownership, query_pool_config,
    query_rate_limit_admin, query_rebalancer, query_remote_pool, query_remote_token,
    query_rmn_proxy, query_router, query_supported_chains, query_token, query_type_and_version,
};
use crate::state::{
    AdminContext, Config, PoolKind, ADMIN, ALLOW_LIST, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = nonzero_addr(deps.api, &msg.token)?;
    let router = nonzero_addr(deps.api, &msg.router)?;
    let rmn_proxy = nonzero_addr(deps.api, &msg.rmn_proxy)?;
    let owner = match msg.owner {
        Some(owner) => nonzero_addr(deps.api, &owner)?,
        None => info.sender,
    };

    // Liquidity is only ever accepted by lock/release pools
    let accept_liquidity =
        msg.pool_kind == PoolKind::LockRelease && msg.accept_liquidity.unwrap_or(false);

    let config = Config {
        token,
        pool_kind: msg.pool_kind,
        allow_list_enabled: !msg.allow_list.is_empty(),
        accept_liquidity,
        rebalancer: None,
    };
    CONFIG.save(deps.storage, &config)?;

    ADMIN.save(
        deps.storage,
        &AdminContext {
            owner: owner.clone(),
            pending_owner: None,
            router,
            rmn_proxy,
            rate_limit_admin: None,
        },
    )?;

    for sender in &msg.allow_list {
        if sender.trim().is_empty() {
            continue;
        }
        let sender = deps.api.addr_validate(sender)?;
        ALLOW_LIST.save(deps.storage, &sender, &Empty {})?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("token", config.token)
        .add_attribute("pool_kind", config.pool_kind.as_str())
        .add_attribute("allow_list_enabled", config.allow_list_enabled.to_string())
        .add_attribute("accept_liquidity", config.accept_liquidity.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfers
        ExecuteMsg::LockOrBurn(input) => execute_lock_or_burn(deps, env, info, input),
        ExecuteMsg::ReleaseOrMint(input) => execute_release_or_mint(deps, env, info, input),

        // Chain registry
        ExecuteMsg::ApplyChainUpdates { chains } => {
            execute_apply_chain_updates(deps, env, info, chains)
        }
        ExecuteMsg::SetChainRateLimiterConfig {
            remote_chain_selector,
            outbound_config,
            inbound_config,
        } => execute_set_chain_rate_limiter_config(
            deps,
            env,
            info,
            remote_chain_selector,
            outbound_config,
            inbound_config,
        ),
        ExecuteMsg::SetRemotePool {
            remote_chain_selector,
            remote_pool_address,
        } => execute_set_remote_pool(deps, info, remote_chain_selector, remote_pool_address),
        ExecuteMsg::ApplyAllowListUpdates { removes, adds } => {
            execute_apply_allow_list_updates(deps, info, removes, adds)
        }

        // Administration
        ExecuteMsg::SetRouter { new_router } => execute_set_router(deps, info, new_router),
        ExecuteMsg::SetRateLimitAdmin { rate_limit_admin } => {
            execute_set_rate_limit_admin(deps, info, rate_limit_admin)
        }
        ExecuteMsg::TransferOwnership { to } => execute_transfer_ownership(deps, info, to),
        ExecuteMsg::AcceptOwnership {} => execute_accept_ownership(deps, info),

        // Liquidity
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::WithdrawLiquidity { amount } => {
            execute_withdraw_liquidity(deps, env, info, amount)
        }
        ExecuteMsg::TransferLiquidity { from, amount } => {
            execute_transfer_liquidity(deps, info, from, amount)
        }
        ExecuteMsg::SetRebalancer { rebalancer } => {
            execute_set_rebalancer(deps, info, rebalancer)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Pool queries
        QueryMsg::PoolConfig {} => to_json_binary(&query_pool_config(deps)?),
        QueryMsg::TypeAndVersion {} => to_json_binary(&query_type_and_version(deps)?),
        QueryMsg::Token {} => to_json_binary(&query_token(deps)?),
        QueryMsg::IsSupportedToken { token } => {
            to_json_binary(&query_is_supported_token(deps, token)?)
        }
        QueryMsg::Ownership {} => to_json_binary(&query_ownership(deps)?),
        QueryMsg::Router {} => to_json_binary(&query_router(deps)?),
        QueryMsg::RmnProxy {} => to_json_binary(&query_rmn_proxy(deps)?),
        QueryMsg::RateLimitAdmin {} => to_json_binary(&query_rate_limit_admin(deps)?),

        // Allowlist queries
        QueryMsg::AllowList {} => to_json_binary(&query_allow_list(deps)?),
        QueryMsg::AllowListEnabled {} => to_json_binary(&query_allow_list_enabled(deps)?),
        QueryMsg::IsAllowListed { sender } => {
            to_json_binary(&query_is_allow_listed(deps, sender)?)
        }

        // Chain queries
        QueryMsg::SupportedChains {} => to_json_binary(&query_supported_chains(deps)?),
        QueryMsg::IsSupportedChain {
            remote_chain_selector,
        } => to_json_binary(&query_is_supported_chain(deps, remote_chain_selector)?),
        QueryMsg::Chain {
            remote_chain_selector,
        } => to_json_binary(&query_chain(deps, remote_chain_selector)?),
        QueryMsg::RemotePool {
            remote_chain_selector,
        } => to_json_binary(&query_remote_pool(deps, remote_chain_selector)?),
        QueryMsg::RemoteToken {
            remote_chain_selector,
        } => to_json_binary(&query_remote_token(deps, remote_chain_selector)?),
        QueryMsg::CurrentInboundRateLimiterState {
            remote_chain_selector,
        } => to_json_binary(&query_current_inbound_state(
            deps,
            env,
            remote_chain_selector,
        )?),
        QueryMsg::CurrentOutboundRateLimiterState {
            remote_chain_selector,
        } => to_json_binary(&query_current_outbound_state(
            deps,
            env,
            remote_chain_selector,
        )?),

        // Liquidity queries
        QueryMsg::Rebalancer {} => to_json_binary(&query_rebalancer(deps)?),
        QueryMsg::CanAcceptLiquidity {} => to_json_binary(&query_can_accept_liquidity(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
