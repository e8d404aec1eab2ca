use soroban_sdk::{contractimpl, panic_with_error, Address, BytesN, Env, String, Vec};

use crate::{
    errors::Errors,
    storage::{
        extend_instance_ttl, get_admin, get_drill_type, has_alt_config, has_drill_type,
        set_admin, set_alt_config, set_drill_type, set_max_drill_count, set_max_supply,
        set_mint_price, set_native_asset, set_registry, set_upgrade_asset,
    },
    treasury::set_treasury,
    types::{AltMintConfig, DrillType},
    CatalogTrait, Contract, ContractArgs, ContractClient,
};

#[contractimpl]
impl Contract {
    pub fn __constructor(
        env: Env,
        admin: Address,
        registry: Address,
        native_asset: Address,
        upgrade_asset: Address,
        treasury: Address,
    ) {
        set_admin(&env, &admin);
        set_registry(&env, &registry);
        set_native_asset(&env, &native_asset);
        set_upgrade_asset(&env, &upgrade_asset);
        set_treasury(&env, &treasury);

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl CatalogTrait for Contract {
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
    ) {
        get_admin(&env).require_auth();

        if has_drill_type(&env, type_id) {
            panic_with_error!(&env, &Errors::DrillTypeExists);
        }

        let levels = max_level + 1;

        if mining_power.len() != levels
            || capacity.len() != levels
            || upgrade_requirement.len() != levels
        {
            panic_with_error!(&env, &Errors::TableLengthMismatch);
        }

        if !use_native_currency && currency.is_none() {
            panic_with_error!(&env, &Errors::CurrencyMissing);
        }

        set_drill_type(
            &env,
            type_id,
            &DrillType {
                name,
                mint_price,
                use_native_currency,
                currency,
                max_level,
                mining_power,
                capacity,
                upgrade_requirement,
            },
        );
        set_mint_price(&env, type_id, 0, mint_price);

        extend_instance_ttl(&env);
    }

    fn add_alt_mint_config(
        env: Env,
        config_id: u32,
        drill_type: u32,
        level: u32,
        currency: Address,
        cost: i128,
        max_mints: u32,
    ) {
        get_admin(&env).require_auth();

        if has_alt_config(&env, config_id) {
            panic_with_error!(&env, &Errors::AltConfigExists);
        }

        let existing = get_drill_type(&env, drill_type)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillTypeMissing));

        if level > existing.max_level {
            panic_with_error!(&env, &Errors::LevelMissing);
        }

        set_alt_config(
            &env,
            config_id,
            &AltMintConfig {
                drill_type,
                level,
                currency,
                cost,
                max_mints,
                minted: 0,
            },
        );

        extend_instance_ttl(&env);
    }

    fn update_mint_price(env: Env, type_id: u32, level: u32, price: i128) {
        get_admin(&env).require_auth();

        let drill_type = get_drill_type(&env, type_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillTypeMissing));

        if level > drill_type.max_level {
            panic_with_error!(&env, &Errors::LevelMissing);
        }

        set_mint_price(&env, type_id, level, price);

        extend_instance_ttl(&env);
    }

    fn update_upgrade_requirement(env: Env, type_id: u32, level: u32, cost: i128) {
        get_admin(&env).require_auth();

        let mut drill_type = get_drill_type(&env, type_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillTypeMissing));

        // level 0 is the mint level, it cannot carry an upgrade cost
        if level == 0 || level > drill_type.max_level {
            panic_with_error!(&env, &Errors::LevelMissing);
        }

        drill_type.upgrade_requirement.set(level, cost);

        set_drill_type(&env, type_id, &drill_type);

        extend_instance_ttl(&env);
    }

    fn update_max_supply(env: Env, type_id: u32, level: u32, cap: u32) {
        get_admin(&env).require_auth();

        let drill_type = get_drill_type(&env, type_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillTypeMissing));

        if level > drill_type.max_level {
            panic_with_error!(&env, &Errors::LevelMissing);
        }

        set_max_supply(&env, type_id, level, cap);

        extend_instance_ttl(&env);
    }

    fn update_max_drill_count(env: Env, count: u64) {
        get_admin(&env).require_auth();

        set_max_drill_count(&env, count);

        extend_instance_ttl(&env);
    }

    fn update_treasury(env: Env, treasury: Address) {
        get_admin(&env).require_auth();

        set_treasury(&env, &treasury);

        extend_instance_ttl(&env);
    }

    fn update_wasm(env: Env, hash: BytesN<32>) {
        get_admin(&env).require_auth();

        env.deployer().update_current_contract_wasm(hash);

        extend_instance_ttl(&env);
    }
}
