use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    errors::Errors,
    types::{AltMintConfig, Drill, DrillType, Storage},
    WEEK_OF_LEDGERS,
};

pub fn extend_instance_ttl(env: &Env) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::Admin)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::CatalogMissing))
}
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::Admin, admin);
}

pub fn get_registry(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::Registry)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::CatalogMissing))
}
pub fn set_registry(env: &Env, registry: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::Registry, registry);
}

pub fn get_native_asset(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::NativeAsset)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::CatalogMissing))
}
pub fn set_native_asset(env: &Env, asset: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::NativeAsset, asset);
}

pub fn get_upgrade_asset(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::UpgradeAsset)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::CatalogMissing))
}
pub fn set_upgrade_asset(env: &Env, asset: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::UpgradeAsset, asset);
}

pub fn get_max_drill_count(env: &Env) -> Option<u64> {
    env.storage()
        .instance()
        .get::<Storage, u64>(&Storage::MaxDrillCount)
}
pub fn set_max_drill_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set::<Storage, u64>(&Storage::MaxDrillCount, &count);
}

pub fn get_drill_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get::<Storage, u64>(&Storage::DrillCount)
        .unwrap_or(0)
}
pub fn set_drill_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set::<Storage, u64>(&Storage::DrillCount, &count);
}

pub fn bump_drill_id(env: &Env) -> u64 {
    let id = env
        .storage()
        .instance()
        .get::<Storage, u64>(&Storage::DrillId)
        .unwrap_or(0)
        + 1;

    env.storage()
        .instance()
        .set::<Storage, u64>(&Storage::DrillId, &id);

    id
}

pub fn has_drill_type(env: &Env, type_id: u32) -> bool {
    env.storage()
        .persistent()
        .has::<Storage>(&Storage::DrillType(type_id))
}
pub fn get_drill_type(env: &Env, type_id: u32) -> Option<DrillType> {
    env.storage()
        .persistent()
        .get::<Storage, DrillType>(&Storage::DrillType(type_id))
}
pub fn set_drill_type(env: &Env, type_id: u32, drill_type: &DrillType) {
    env.storage()
        .persistent()
        .set::<Storage, DrillType>(&Storage::DrillType(type_id), drill_type);
}

pub fn get_drill(env: &Env, drill_id: u64) -> Option<Drill> {
    env.storage()
        .persistent()
        .get::<Storage, Drill>(&Storage::Drill(drill_id))
}
pub fn set_drill(env: &Env, drill_id: u64, drill: &Drill) {
    env.storage()
        .persistent()
        .set::<Storage, Drill>(&Storage::Drill(drill_id), drill);
}

pub fn get_mint_price(env: &Env, type_id: u32, level: u32) -> Option<i128> {
    env.storage()
        .persistent()
        .get::<Storage, i128>(&Storage::MintPrice(type_id, level))
}
pub fn set_mint_price(env: &Env, type_id: u32, level: u32, price: i128) {
    env.storage()
        .persistent()
        .set::<Storage, i128>(&Storage::MintPrice(type_id, level), &price);
}

pub fn get_max_supply(env: &Env, type_id: u32, level: u32) -> Option<u32> {
    env.storage()
        .persistent()
        .get::<Storage, u32>(&Storage::MaxSupply(type_id, level))
}
pub fn set_max_supply(env: &Env, type_id: u32, level: u32, cap: u32) {
    env.storage()
        .persistent()
        .set::<Storage, u32>(&Storage::MaxSupply(type_id, level), &cap);
}

pub fn get_minted_at_level(env: &Env, type_id: u32, level: u32) -> u32 {
    env.storage()
        .persistent()
        .get::<Storage, u32>(&Storage::MintedAtLevel(type_id, level))
        .unwrap_or(0)
}
pub fn set_minted_at_level(env: &Env, type_id: u32, level: u32, minted: u32) {
    env.storage()
        .persistent()
        .set::<Storage, u32>(&Storage::MintedAtLevel(type_id, level), &minted);
}

pub fn has_alt_config(env: &Env, config_id: u32) -> bool {
    env.storage()
        .persistent()
        .has::<Storage>(&Storage::AltConfig(config_id))
}
pub fn get_alt_config(env: &Env, config_id: u32) -> Option<AltMintConfig> {
    env.storage()
        .persistent()
        .get::<Storage, AltMintConfig>(&Storage::AltConfig(config_id))
}
pub fn set_alt_config(env: &Env, config_id: u32, config: &AltMintConfig) {
    env.storage()
        .persistent()
        .set::<Storage, AltMintConfig>(&Storage::AltConfig(config_id), config);
}
