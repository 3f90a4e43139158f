//! Liquidity management for lock/release pools.
//!
//! Lock/release pools hold the tokens they release. The rebalancer funds the
//! pool through a CW20 `Send` and drains it with `WithdrawLiquidity`; the
//! owner can pull liquidity out of a previous pool that names this one as its
//! rebalancer.

use cosmwasm_std::{
    from_json, to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Storage,
    Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use super::only_owner;
use super::transfer::pool_balance;
use crate::admission::nonzero_addr;
use crate::error::ContractError;
use crate::events::{into_events, PoolEvent};
use crate::msg::{ExecuteMsg, ReceiveMsg};
use crate::state::{Config, PoolKind, ADMIN, CONFIG};

fn load_lock_release(storage: &dyn Storage) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if config.pool_kind != PoolKind::LockRelease {
        return Err(ContractError::LiquidityNotSupported);
    }
    Ok(config)
}

/// CW20 receive hook.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = load_lock_release(deps.storage)?;
    if info.sender != config.token {
        return Err(ContractError::InvalidToken {
            token: info.sender.to_string(),
        });
    }

    let msg: ReceiveMsg = from_json(&cw20_msg.msg)?;
    match msg {
        ReceiveMsg::ProvideLiquidity {} => {
            if !config.accept_liquidity {
                return Err(ContractError::LiquidityNotAccepted);
            }
            let provider = deps.api.addr_validate(&cw20_msg.sender)?;
            if config.rebalancer.as_ref() != Some(&provider) {
                return Err(ContractError::Unauthorized { caller: provider });
            }

            Ok(Response::new()
                .add_events(into_events(vec![PoolEvent::LiquidityAdded {
                    provider: provider.clone(),
                    amount: cw20_msg.amount,
                }]))
                .add_attribute("method", "provide_liquidity")
                .add_attribute("provider", provider)
                .add_attribute("amount", cw20_msg.amount.to_string()))
        }
    }
}

/// Return pooled tokens to the rebalancer.
pub fn execute_withdraw_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = load_lock_release(deps.storage)?;
    if config.rebalancer.as_ref() != Some(&info.sender) {
        return Err(ContractError::Unauthorized {
            caller: info.sender,
        });
    }

    let balance = pool_balance(deps.as_ref(), &env, config.token.as_str())?;
    if balance < amount {
        return Err(ContractError::InsufficientLiquidity);
    }

    let transfer = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer)
        .add_events(into_events(vec![PoolEvent::LiquidityRemoved {
            provider: info.sender.clone(),
            amount,
        }]))
        .add_attribute("method", "withdraw_liquidity")
        .add_attribute("provider", info.sender)
        .add_attribute("amount", amount.to_string()))
}

/// Pull liquidity from an older pool. This pool must be that pool's
/// rebalancer or the withdrawal fails and the message reverts.
pub fn execute_transfer_liquidity(
    deps: DepsMut,
    info: MessageInfo,
    from: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    load_lock_release(deps.storage)?;
    let ctx = ADMIN.load(deps.storage)?;
    only_owner(&ctx, &info.sender)?;

    let from = nonzero_addr(deps.api, &from)?;
    let withdraw = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: from.to_string(),
        msg: to_json_binary(&ExecuteMsg::WithdrawLiquidity { amount })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(withdraw)
        .add_events(into_events(vec![PoolEvent::LiquidityTransferred {
            from: from.clone(),
            amount,
        }]))
        .add_attribute("method", "transfer_liquidity")
        .add_attribute("from", from)
        .add_attribute("amount", amount.to_string()))
}

/// Authorization: Owner only
pub fn execute_set_rebalancer(
    deps: DepsMut,
    info: MessageInfo,
    rebalancer: String,
) -> Result<Response, ContractError> {
    let mut config = load_lock_release(deps.storage)?;
    let ctx = ADMIN.load(deps.storage)?;
    only_owner(&ctx, &info.sender)?;

    let rebalancer = nonzero_addr(deps.api, &rebalancer)?;
    config.rebalancer = Some(rebalancer.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_rebalancer")
        .add_attribute("rebalancer", rebalancer))
}
