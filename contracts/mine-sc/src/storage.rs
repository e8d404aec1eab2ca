use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::{
    errors::Errors,
    types::{Mine, Stake, Storage},
    WEEK_OF_LEDGERS,
};

pub fn extend_instance_ttl(env: &Env) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn get_mine(env: &Env) -> Mine {
    env.storage()
        .instance()
        .get::<Storage, Mine>(&Storage::Mine)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::MineMissing))
}
pub fn set_mine(env: &Env, mine: &Mine) {
    env.storage()
        .instance()
        .set::<Storage, Mine>(&Storage::Mine, mine);
}

pub fn get_capacity_table(env: &Env) -> Vec<i128> {
    env.storage()
        .instance()
        .get::<Storage, Vec<i128>>(&Storage::CapacityTable)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::MineMissing))
}
pub fn set_capacity_table(env: &Env, table: &Vec<i128>) {
    env.storage()
        .instance()
        .set::<Storage, Vec<i128>>(&Storage::CapacityTable, table);
}

pub fn get_upgrade_costs(env: &Env) -> Vec<i128> {
    env.storage()
        .instance()
        .get::<Storage, Vec<i128>>(&Storage::UpgradeCosts)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::MineMissing))
}
pub fn set_upgrade_costs(env: &Env, costs: &Vec<i128>) {
    env.storage()
        .instance()
        .set::<Storage, Vec<i128>>(&Storage::UpgradeCosts, costs);
}

pub fn has_stake(env: &Env, account: Address) -> bool {
    env.storage().persistent().has::<Storage>(&Storage::Stake(account))
}
pub fn get_stake(env: &Env, account: Address) -> Option<Stake> {
    env.storage()
        .persistent()
        .get::<Storage, Stake>(&Storage::Stake(account))
}
pub fn set_stake(env: &Env, account: Address, stake: &Stake) {
    env.storage()
        .persistent()
        .set::<Storage, Stake>(&Storage::Stake(account), stake);
}
pub fn remove_stake(env: &Env, account: Address) {
    env.storage()
        .persistent()
        .remove::<Storage>(&Storage::Stake(account));
}

pub fn get_user_level(env: &Env, account: Address) -> u32 {
    env.storage()
        .persistent()
        .get::<Storage, u32>(&Storage::UserLevel(account))
        .unwrap_or(0)
}
pub fn set_user_level(env: &Env, account: Address, level: u32) {
    env.storage()
        .persistent()
        .set::<Storage, u32>(&Storage::UserLevel(account), &level);
}
