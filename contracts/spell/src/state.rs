//! State definitions for the spell contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

use common::spell::SpellAction;

#[cw_serde]
pub struct Spell {
    pub creator: Addr,
    pub description: String,
    pub actions: Vec<SpellAction>,
    pub locked: bool,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:atoken-bridge-spell";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const SPELL: Item<Spell> = Item::new("spell");
