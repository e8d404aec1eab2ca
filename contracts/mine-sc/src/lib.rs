#![no_std]

use soroban_sdk::{contract, contractclient, Address, BytesN, Env};

mod contract_mine;
mod contract_stake;
mod contract_upgrade;
mod errors;
mod storage;
mod tests;
mod types;

pub use types::{Mine, Stake};

pub const POWER_BASIS: i128 = 100; // mining power and capacity tables store 100 = 1.00x
pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

#[contract]
pub struct Contract;

/// Catalog surface consulted for the staked drill's per-level tables.
#[contractclient(name = "DrillCatalogClient")]
pub trait DrillCatalog {
    fn get_drill_mining_power(env: Env, drill_id: u64) -> u32;

    fn get_drill_capacity(env: Env, drill_id: u64) -> u32;
}

/// Ownership/approval registry for drill tokens.
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    fn owner_of(env: Env, id: u64) -> Address;

    fn get_approved(env: Env, id: u64) -> Option<Address>;

    fn transfer_from(env: Env, operator: Address, from: Address, to: Address, id: u64);
}

pub trait MineTrait {
    fn pause(env: Env);

    fn unpause(env: Env);

    fn update_treasury(env: Env, treasury: Address);

    fn update_base_production(env: Env, base_production: i128);

    fn update_wasm(env: Env, hash: BytesN<32>);

    fn get_mine(env: Env) -> Mine;

    fn get_capacity_at_level(env: Env, level: u32) -> i128;
}

pub trait StakeTrait {
    fn stake(env: Env, staker: Address, drill_id: u64);

    fn unstake(env: Env, staker: Address);

    fn collect(env: Env, staker: Address);

    fn get_accumulated_resources(env: Env, account: Address) -> i128;

    fn get_stake(env: Env, account: Address) -> Stake;
}

pub trait UpgradeTrait {
    fn upgrade(env: Env, account: Address);

    fn get_user_level(env: Env, account: Address) -> u32;

    fn get_upgrade_cost(env: Env, account: Address) -> i128;
}
