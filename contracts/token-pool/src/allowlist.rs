//! Sender allowlist.
//!
//! Membership can be edited at any time; it only gates outgoing transfers
//! while `Config::allow_list_enabled` is set.

use cosmwasm_std::{Addr, Api, Empty, Order, StdResult, Storage};

use crate::error::ContractError;
use crate::events::PoolEvent;
use crate::state::ALLOW_LIST;

/// Remove then add members. Only actual membership changes produce events;
/// empty entries in `adds` are skipped.
pub fn apply_allow_list_updates(
    storage: &mut dyn Storage,
    api: &dyn Api,
    removes: Vec<String>,
    adds: Vec<String>,
) -> Result<Vec<PoolEvent>, ContractError> {
    let mut events = vec![];

    for remove in removes {
        let sender = api.addr_validate(&remove)?;
        if ALLOW_LIST.has(storage, &sender) {
            ALLOW_LIST.remove(storage, &sender);
            events.push(PoolEvent::AllowListRemove { sender });
        }
    }

    for add in adds {
        if add.trim().is_empty() {
            continue;
        }
        let sender = api.addr_validate(&add)?;
        if !ALLOW_LIST.has(storage, &sender) {
            ALLOW_LIST.save(storage, &sender, &Empty {})?;
            events.push(PoolEvent::AllowListAdd { sender });
        }
    }

    Ok(events)
}

/// All members, in storage order.
pub fn members(storage: &dyn Storage) -> StdResult<Vec<Addr>> {
    ALLOW_LIST
        .keys(storage, None, None, Order::Ascending)
        .collect()
}
