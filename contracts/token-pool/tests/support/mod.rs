//! Shared multi-test harness: a cw20-base token, mock router and RMN
//! contracts, and a token pool wired to all three.

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use cw_storage_plus::{Item, Map};

use common::{IsCursedResponse, IsOffRampResponse, OnRampResponse, RmnQueryMsg, RouterQueryMsg};
use token_pool::msg::{
    ChainUpdate, ExecuteMsg, InstantiateMsg, LockOrBurnIn, QueryMsg, ReleaseOrMintIn,
};
use token_pool::rate_limiter::{RateLimiterConfig, TokenBucket};
use token_pool::state::PoolKind;

pub const CHAIN: u64 = 5009297550715157269;
pub const OTHER_CHAIN: u64 = 4949039107694359620;
pub const INITIAL_BALANCE: u128 = 1_000_000;

pub fn remote_pool() -> Binary {
    Binary::from(b"remote-pool".to_vec())
}

pub fn remote_token() -> Binary {
    Binary::from(b"remote-token".to_vec())
}

pub fn limited(capacity: u128, rate: u128) -> RateLimiterConfig {
    RateLimiterConfig {
        is_enabled: true,
        capacity: Uint128::new(capacity),
        rate: Uint128::new(rate),
    }
}

pub fn add_update(
    selector: u64,
    outbound: RateLimiterConfig,
    inbound: RateLimiterConfig,
) -> ChainUpdate {
    ChainUpdate {
        remote_chain_selector: selector,
        allowed: true,
        remote_pool_address: remote_pool(),
        remote_token_address: remote_token(),
        outbound_rate_limiter_config: outbound,
        inbound_rate_limiter_config: inbound,
        add_only: false,
    }
}

// ============================================================================
// Mock Router
// ============================================================================

pub mod mock_router {
    use super::*;

    const ON_RAMPS: Map<u64, Addr> = Map::new("on_ramps");
    const OFF_RAMPS: Map<(u64, &Addr), Empty> = Map::new("off_ramps");

    #[cw_serde]
    pub enum ExecuteMsg {
        SetOnRamp { chain: u64, on_ramp: String },
        AddOffRamp { chain: u64, off_ramp: String },
        RemoveOffRamp { chain: u64, off_ramp: String },
    }

    pub fn instantiate(_: DepsMut, _: Env, _: MessageInfo, _: Empty) -> StdResult<Response> {
        Ok(Response::new())
    }

    pub fn execute(deps: DepsMut, _: Env, _: MessageInfo, msg: ExecuteMsg) -> StdResult<Response> {
        match msg {
            ExecuteMsg::SetOnRamp { chain, on_ramp } => {
                ON_RAMPS.save(deps.storage, chain, &Addr::unchecked(on_ramp))?;
            }
            ExecuteMsg::AddOffRamp { chain, off_ramp } => {
                OFF_RAMPS.save(deps.storage, (chain, &Addr::unchecked(off_ramp)), &Empty {})?;
            }
            ExecuteMsg::RemoveOffRamp { chain, off_ramp } => {
                OFF_RAMPS.remove(deps.storage, (chain, &Addr::unchecked(off_ramp)));
            }
        }
        Ok(Response::new())
    }

    pub fn query(deps: Deps, _: Env, msg: RouterQueryMsg) -> StdResult<Binary> {
        match msg {
            RouterQueryMsg::OnRamp {
                dest_chain_selector,
            } => to_json_binary(&OnRampResponse {
                on_ramp: ON_RAMPS.may_load(deps.storage, dest_chain_selector)?,
            }),
            RouterQueryMsg::IsOffRamp {
                source_chain_selector,
                off_ramp,
            } => to_json_binary(&IsOffRampResponse {
                is_off_ramp: OFF_RAMPS.has(
                    deps.storage,
                    (source_chain_selector, &Addr::unchecked(off_ramp)),
                ),
            }),
        }
    }
}

// ============================================================================
// Mock RMN
// ============================================================================

pub mod mock_rmn {
    use super::*;

    const CURSED: Map<u64, Empty> = Map::new("cursed");
    const GLOBAL_CURSE: Item<bool> = Item::new("global_curse");

    #[cw_serde]
    pub enum ExecuteMsg {
        Curse { subject: u64 },
        Uncurse { subject: u64 },
        SetGlobalCurse { cursed: bool },
    }

    pub fn instantiate(_: DepsMut, _: Env, _: MessageInfo, _: Empty) -> StdResult<Response> {
        Ok(Response::new())
    }

    pub fn execute(deps: DepsMut, _: Env, _: MessageInfo, msg: ExecuteMsg) -> StdResult<Response> {
        match msg {
            ExecuteMsg::Curse { subject } => CURSED.save(deps.storage, subject, &Empty {})?,
            ExecuteMsg::Uncurse { subject } => CURSED.remove(deps.storage, subject),
            ExecuteMsg::SetGlobalCurse { cursed } => GLOBAL_CURSE.save(deps.storage, &cursed)?,
        }
        Ok(Response::new())
    }

    pub fn query(deps: Deps, _: Env, msg: RmnQueryMsg) -> StdResult<Binary> {
        match msg {
            RmnQueryMsg::IsCursed { subject } => {
                let global = GLOBAL_CURSE.may_load(deps.storage)?.unwrap_or(false);
                to_json_binary(&IsCursedResponse {
                    cursed: global || CURSED.has(deps.storage, subject),
                })
            }
        }
    }
}

// ============================================================================
// Contracts
// ============================================================================

fn contract_pool() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        token_pool::contract::execute,
        token_pool::contract::instantiate,
        token_pool::contract::query,
    )
    .with_migrate(token_pool::contract::migrate);
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

fn contract_router() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        mock_router::execute,
        mock_router::instantiate,
        mock_router::query,
    ))
}

fn contract_rmn() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        mock_rmn::execute,
        mock_rmn::instantiate,
        mock_rmn::query,
    ))
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub pool: Addr,
    pub pool_code_id: u64,
    pub token: Addr,
    pub router: Addr,
    pub rmn: Addr,
    pub admin: Addr,
    pub on_ramp: Addr,
    pub off_ramp: Addr,
    pub user: Addr,
}

/// Instantiate a pool of `pool_kind` with CHAIN's on-ramp and off-ramp
/// registered on the router. No remote chain is configured on the pool yet.
pub fn setup(pool_kind: PoolKind, allow_list: Vec<String>) -> Suite {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let on_ramp = Addr::unchecked("terra1onramp");
    let off_ramp = Addr::unchecked("terra1offramp");
    let user = Addr::unchecked("terra1user");

    let router_code_id = app.store_code(contract_router());
    let router = app
        .instantiate_contract(router_code_id, admin.clone(), &Empty {}, &[], "router", None)
        .unwrap();

    let rmn_code_id = app.store_code(contract_rmn());
    let rmn = app
        .instantiate_contract(rmn_code_id, admin.clone(), &Empty {}, &[], "rmn", None)
        .unwrap();

    let cw20_code_id = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code_id,
            admin.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Bridged Token".to_string(),
                symbol: "BRG".to_string(),
                decimals: 6,
                initial_balances: vec![
                    Cw20Coin {
                        address: on_ramp.to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    },
                    Cw20Coin {
                        address: admin.to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    },
                ],
                mint: Some(MinterResponse {
                    minter: admin.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            "cw20-bridged",
            None,
        )
        .unwrap();

    let pool_code_id = app.store_code(contract_pool());
    let pool = app
        .instantiate_contract(
            pool_code_id,
            admin.clone(),
            &InstantiateMsg {
                token: token.to_string(),
                pool_kind: pool_kind.clone(),
                allow_list,
                rmn_proxy: rmn.to_string(),
                router: router.to_string(),
                accept_liquidity: Some(true),
                owner: None,
            },
            &[],
            "token-pool",
            Some(admin.to_string()),
        )
        .unwrap();

    if pool_kind == PoolKind::BurnMint {
        app.execute_contract(
            admin.clone(),
            token.clone(),
            &Cw20ExecuteMsg::UpdateMinter {
                new_minter: Some(pool.to_string()),
            },
            &[],
        )
        .unwrap();
    }

    app.execute_contract(
        admin.clone(),
        router.clone(),
        &mock_router::ExecuteMsg::SetOnRamp {
            chain: CHAIN,
            on_ramp: on_ramp.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        router.clone(),
        &mock_router::ExecuteMsg::AddOffRamp {
            chain: CHAIN,
            off_ramp: off_ramp.to_string(),
        },
        &[],
    )
    .unwrap();

    Suite {
        app,
        pool,
        pool_code_id,
        token,
        router,
        rmn,
        admin,
        on_ramp,
        off_ramp,
        user,
    }
}

impl Suite {
    pub fn execute(&mut self, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.pool.clone(), msg, &[])
    }

    pub fn apply_chain_updates(&mut self, chains: Vec<ChainUpdate>) -> anyhow::Result<AppResponse> {
        let admin = self.admin.clone();
        self.execute(&admin, &ExecuteMsg::ApplyChainUpdates { chains })
    }

    /// Register CHAIN with the given limits.
    pub fn add_chain(&mut self, outbound: RateLimiterConfig, inbound: RateLimiterConfig) {
        self.apply_chain_updates(vec![add_update(CHAIN, outbound, inbound)])
            .unwrap();
    }

    pub fn lock_or_burn_msg(&self, amount: u128) -> ExecuteMsg {
        ExecuteMsg::LockOrBurn(LockOrBurnIn {
            receiver: Binary::from(b"remote-receiver".to_vec()),
            remote_chain_selector: CHAIN,
            original_sender: self.user.to_string(),
            amount: Uint128::new(amount),
            local_token: self.token.to_string(),
        })
    }

    /// The on-ramp moves `amount` into the pool and asks it to lock or burn.
    pub fn lock_or_burn(&mut self, amount: u128) -> anyhow::Result<AppResponse> {
        let on_ramp = self.on_ramp.clone();
        self.app
            .execute_contract(
                on_ramp.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::Transfer {
                    recipient: self.pool.to_string(),
                    amount: Uint128::new(amount),
                },
                &[],
            )
            .unwrap();
        let msg = self.lock_or_burn_msg(amount);
        self.execute(&on_ramp, &msg)
    }

    pub fn release_or_mint_msg(&self, amount: u128) -> ExecuteMsg {
        ExecuteMsg::ReleaseOrMint(ReleaseOrMintIn {
            original_sender: Binary::from(b"remote-sender".to_vec()),
            remote_chain_selector: CHAIN,
            receiver: self.user.to_string(),
            amount: Uint128::new(amount),
            local_token: self.token.to_string(),
            source_pool_address: remote_pool(),
            source_pool_data: Binary::default(),
            offchain_token_data: Binary::default(),
        })
    }

    pub fn release_or_mint(&mut self, amount: u128) -> anyhow::Result<AppResponse> {
        let off_ramp = self.off_ramp.clone();
        let msg = self.release_or_mint_msg(amount);
        self.execute(&off_ramp, &msg)
    }

    pub fn advance(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += 1;
        });
    }

    pub fn query<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> StdResult<T> {
        self.app.wrap().query_wasm_smart(self.pool.clone(), msg)
    }

    pub fn outbound_state(&self) -> TokenBucket {
        self.query(&QueryMsg::CurrentOutboundRateLimiterState {
            remote_chain_selector: CHAIN,
        })
        .unwrap()
    }

    pub fn inbound_state(&self) -> TokenBucket {
        self.query(&QueryMsg::CurrentInboundRateLimiterState {
            remote_chain_selector: CHAIN,
        })
        .unwrap()
    }

    pub fn balance(&self, addr: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.token.clone(),
                &Cw20QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    pub fn total_supply(&self) -> Uint128 {
        let res: cw20::TokenInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(self.token.clone(), &Cw20QueryMsg::TokenInfo {})
            .unwrap();
        res.total_supply
    }
}

// ============================================================================
// Event Helpers
// ============================================================================

/// Value of `key` on the first pool event of type `ty`.
pub fn event_attr(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty.trim_start_matches("wasm-") == ty)
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

pub fn has_event(res: &AppResponse, ty: &str) -> bool {
    res.events
        .iter()
        .any(|e| e.ty.trim_start_matches("wasm-") == ty)
}

pub fn count_events(res: &AppResponse, ty: &str) -> usize {
    res.events
        .iter()
        .filter(|e| e.ty.trim_start_matches("wasm-") == ty)
        .count()
}

pub fn err_string(res: anyhow::Result<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}
