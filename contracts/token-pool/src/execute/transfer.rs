//! Transfer handlers (LockOrBurn and ReleaseOrMint).
//!
//! Both run the admission guard, consume the direction's bucket and then hand
//! the token movement to the CW20 contract. Any failure reverts the whole
//! message, so a rejected transfer never burns, mints or consumes capacity.

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::admission::{check_lock_or_burn, check_release_or_mint};
use crate::error::ContractError;
use crate::events::{into_events, PoolEvent};
use crate::msg::{LockOrBurnIn, LockOrBurnOut, ReleaseOrMintIn, ReleaseOrMintOut};
use crate::state::{PoolKind, ADMIN, CHAINS, CONFIG};

fn cw20_msg(token: &str, msg: &Cw20ExecuteMsg) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

/// Token balance the pool holds.
pub(crate) fn pool_balance(
    deps: Deps,
    env: &Env,
    token: &str,
) -> Result<Uint128, ContractError> {
    let response: BalanceResponse = deps.querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    Ok(response.balance)
}

/// Burn or lock tokens the on-ramp already moved into the pool.
pub fn execute_lock_or_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    input: LockOrBurnIn,
) -> Result<Response, ContractError> {
    let ctx = ADMIN.load(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;
    let admitted = check_lock_or_burn(deps.as_ref(), &ctx, &config, &info.sender, &input)?;
    let mut chain = admitted.chain;

    let mut events = vec![];
    let consumed = chain.outbound.consume(
        env.block.time.seconds(),
        input.amount,
        Some(&config.token),
    )?;
    if let Some(tokens) = consumed {
        events.push(PoolEvent::TokensConsumed { tokens });
    }
    CHAINS.save(deps.storage, input.remote_chain_selector, &chain)?;

    let mut messages = vec![];
    match config.pool_kind {
        PoolKind::BurnMint => {
            if !input.amount.is_zero() {
                messages.push(cw20_msg(
                    config.token.as_str(),
                    &Cw20ExecuteMsg::Burn {
                        amount: input.amount,
                    },
                )?);
            }
            events.push(PoolEvent::Burned {
                sender: info.sender.clone(),
                amount: input.amount,
            });
        }
        PoolKind::LockRelease => events.push(PoolEvent::Locked {
            sender: info.sender.clone(),
            amount: input.amount,
        }),
    }

    let out = LockOrBurnOut {
        dest_token_address: chain.remote_token_address,
        dest_pool_address: chain.remote_pool_address,
        dest_pool_data: Binary::default(),
    };

    Ok(Response::new()
        .add_messages(messages)
        .add_events(into_events(events))
        .set_data(to_json_binary(&out)?)
        .add_attribute("method", "lock_or_burn")
        .add_attribute(
            "remote_chain_selector",
            input.remote_chain_selector.to_string(),
        )
        .add_attribute("original_sender", admitted.original_sender)
        .add_attribute("amount", input.amount.to_string()))
}

/// Mint or release tokens for a transfer arriving from a remote chain.
pub fn execute_release_or_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    input: ReleaseOrMintIn,
) -> Result<Response, ContractError> {
    let ctx = ADMIN.load(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;
    let admitted = check_release_or_mint(deps.as_ref(), &ctx, &config, &info.sender, &input)?;
    let mut chain = admitted.chain;

    // Only the registered counterpart pool may originate releases.
    if input.source_pool_address != chain.remote_pool_address {
        return Err(ContractError::InvalidSourcePoolAddress {
            source_pool_address: input.source_pool_address,
        });
    }

    let mut events = vec![];
    let consumed = chain.inbound.consume(
        env.block.time.seconds(),
        input.amount,
        Some(&config.token),
    )?;
    if let Some(tokens) = consumed {
        events.push(PoolEvent::TokensConsumed { tokens });
    }
    CHAINS.save(deps.storage, input.remote_chain_selector, &chain)?;

    let receiver = admitted.receiver;
    let mut messages = vec![];
    match config.pool_kind {
        PoolKind::BurnMint => {
            if !input.amount.is_zero() {
                messages.push(cw20_msg(
                    config.token.as_str(),
                    &Cw20ExecuteMsg::Mint {
                        recipient: receiver.to_string(),
                        amount: input.amount,
                    },
                )?);
            }
            events.push(PoolEvent::Minted {
                sender: info.sender.clone(),
                recipient: receiver.clone(),
                amount: input.amount,
            });
        }
        PoolKind::LockRelease => {
            let balance = pool_balance(deps.as_ref(), &env, config.token.as_str())?;
            if balance < input.amount {
                return Err(ContractError::InsufficientLiquidity);
            }
            if !input.amount.is_zero() {
                messages.push(cw20_msg(
                    config.token.as_str(),
                    &Cw20ExecuteMsg::Transfer {
                        recipient: receiver.to_string(),
                        amount: input.amount,
                    },
                )?);
            }
            events.push(PoolEvent::Released {
                sender: info.sender.clone(),
                recipient: receiver.clone(),
                amount: input.amount,
            });
        }
    }

    let out = ReleaseOrMintOut {
        local_token: config.token,
        destination_amount: input.amount,
    };

    Ok(Response::new()
        .add_messages(messages)
        .add_events(into_events(events))
        .set_data(to_json_binary(&out)?)
        .add_attribute("method", "release_or_mint")
        .add_attribute(
            "remote_chain_selector",
            input.remote_chain_selector.to_string(),
        )
        .add_attribute("receiver", receiver)
        .add_attribute("amount", input.amount.to_string()))
}
