#![no_std]

use soroban_sdk::{contract, contractclient, Address, BytesN, Env, String, Vec};

mod contract_catalog;
mod contract_drill;
mod errors;
mod storage;
mod tests;
mod treasury;
mod types;

pub use types::Drill;

pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

#[contract]
pub struct Contract;

/// Ownership registry the catalog mints into and consults for drill owners.
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    fn mint(env: Env, to: Address, id: u64);

    fn owner_of(env: Env, id: u64) -> Address;
}

pub trait CatalogTrait {
    #[allow(clippy::too_many_arguments)]
    fn add_drill_type(
        env: Env,
        type_id: u32,
        name: String,
        mint_price: i128,
        use_native_currency: bool,
        currency: Option<Address>,
        max_level: u32,
        mining_power: Vec<u32>,
        capacity: Vec<u32>,
        upgrade_requirement: Vec<i128>,
    );

    fn add_alt_mint_config(
        env: Env,
        config_id: u32,
        drill_type: u32,
        level: u32,
        currency: Address,
        cost: i128,
        max_mints: u32,
    );

    fn update_mint_price(env: Env, type_id: u32, level: u32, price: i128);

    fn update_upgrade_requirement(env: Env, type_id: u32, level: u32, cost: i128);

    fn update_max_supply(env: Env, type_id: u32, level: u32, cap: u32);

    fn update_max_drill_count(env: Env, count: u64);

    fn update_treasury(env: Env, treasury: Address);

    fn update_wasm(env: Env, hash: BytesN<32>);
}

pub trait DrillTrait {
    fn mint_drill(env: Env, buyer: Address, type_id: u32, level: u32, payment: i128) -> u64;

    fn alternative_mint(env: Env, buyer: Address, config_id: u32) -> u64;

    fn upgrade_drill(env: Env, operator: Address, drill_id: u64);

    fn get_drill(env: Env, drill_id: u64) -> Drill;

    fn get_mint_price(env: Env, type_id: u32, level: u32) -> i128;

    fn get_drill_mining_power(env: Env, drill_id: u64) -> u32;

    fn get_drill_capacity(env: Env, drill_id: u64) -> u32;

    fn get_upgrade_requirement(env: Env, type_id: u32, level: u32) -> i128;

    fn get_drills_available_at_level(env: Env, type_id: u32, level: u32) -> Option<u32>;

    fn get_drill_count(env: Env) -> u64;

    fn get_treasury(env: Env) -> Address;
}
