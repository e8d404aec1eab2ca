use soroban_sdk::{contractimpl, panic_with_error, Address, Env};

use crate::{
    errors::Errors,
    storage::{
        bump_drill_id, extend_instance_ttl, get_alt_config, get_drill, get_drill_count,
        get_drill_type, get_max_drill_count, get_max_supply, get_mint_price, get_minted_at_level,
        get_native_asset, get_registry, get_upgrade_asset, has_drill_type, set_alt_config,
        set_drill, set_drill_count, set_minted_at_level,
    },
    treasury::{get_treasury, route_payment},
    types::{Drill, DrillType},
    AssetRegistryClient, Contract, ContractArgs, ContractClient, DrillTrait,
};

#[contractimpl]
impl DrillTrait for Contract {
    fn mint_drill(env: Env, buyer: Address, type_id: u32, level: u32, payment: i128) -> u64 {
        buyer.require_auth();

        let drill_type = get_drill_type(&env, type_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillTypeMissing));
        let price = get_mint_price(&env, type_id, level)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::LevelMissing));

        if payment < price {
            panic_with_error!(&env, &Errors::InsufficientPayment);
        }

        // the full attached amount is forwarded, not just the price
        route_payment(&env, &mint_currency(&env, &drill_type), &buyer, payment);

        let id = allocate_drill(&env, &buyer, type_id, level);

        extend_instance_ttl(&env);

        id
    }

    fn alternative_mint(env: Env, buyer: Address, config_id: u32) -> u64 {
        buyer.require_auth();

        let mut config = get_alt_config(&env, config_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::AltConfigMissing));

        if config.minted >= config.max_mints {
            panic_with_error!(&env, &Errors::SupplyExhausted);
        }

        route_payment(&env, &config.currency, &buyer, config.cost);

        let id = allocate_drill(&env, &buyer, config.drill_type, config.level);

        config.minted += 1;

        set_alt_config(&env, config_id, &config);

        extend_instance_ttl(&env);

        id
    }

    fn upgrade_drill(env: Env, operator: Address, drill_id: u64) {
        operator.require_auth();

        let mut drill = get_drill(&env, drill_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillMissing));
        let drill_type = get_drill_type(&env, drill.drill_type)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillTypeMissing));

        let registry = AssetRegistryClient::new(&env, &get_registry(&env));

        if registry.owner_of(&drill_id) != operator {
            panic_with_error!(&env, &Errors::NotDrillOwner);
        }

        if drill.level >= drill_type.max_level {
            panic_with_error!(&env, &Errors::MaxLevelReached);
        }

        let cost = drill_type
            .upgrade_requirement
            .get(drill.level + 1)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::LevelMissing));

        route_payment(&env, &get_upgrade_asset(&env), &operator, cost);

        drill.level += 1;

        set_drill(&env, drill_id, &drill);

        extend_instance_ttl(&env);
    }

    fn get_drill(env: Env, drill_id: u64) -> Drill {
        get_drill(&env, drill_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillMissing))
    }

    fn get_mint_price(env: Env, type_id: u32, level: u32) -> i128 {
        if !has_drill_type(&env, type_id) {
            panic_with_error!(&env, &Errors::DrillTypeMissing);
        }

        get_mint_price(&env, type_id, level)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::LevelMissing))
    }

    fn get_drill_mining_power(env: Env, drill_id: u64) -> u32 {
        let drill = get_drill(&env, drill_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillMissing));
        let drill_type = get_drill_type(&env, drill.drill_type)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillTypeMissing));

        drill_type
            .mining_power
            .get(drill.level)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::LevelMissing))
    }

    fn get_drill_capacity(env: Env, drill_id: u64) -> u32 {
        let drill = get_drill(&env, drill_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillMissing));
        let drill_type = get_drill_type(&env, drill.drill_type)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillTypeMissing));

        drill_type
            .capacity
            .get(drill.level)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::LevelMissing))
    }

    fn get_upgrade_requirement(env: Env, type_id: u32, level: u32) -> i128 {
        let drill_type = get_drill_type(&env, type_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::DrillTypeMissing));

        drill_type
            .upgrade_requirement
            .get(level)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::LevelMissing))
    }

    fn get_drills_available_at_level(env: Env, type_id: u32, level: u32) -> Option<u32> {
        get_max_supply(&env, type_id, level)
            .map(|cap| cap.saturating_sub(get_minted_at_level(&env, type_id, level)))
    }

    fn get_drill_count(env: Env) -> u64 {
        get_drill_count(&env)
    }

    fn get_treasury(env: Env) -> Address {
        get_treasury(&env)
    }
}

fn mint_currency(env: &Env, drill_type: &DrillType) -> Address {
    if drill_type.use_native_currency {
        get_native_asset(env)
    } else {
        drill_type
            .currency
            .clone()
            .unwrap_or_else(|| panic_with_error!(env, &Errors::CurrencyMissing))
    }
}

fn allocate_drill(env: &Env, to: &Address, type_id: u32, level: u32) -> u64 {
    let count = get_drill_count(env);

    if let Some(max) = get_max_drill_count(env) {
        if count >= max {
            panic_with_error!(env, &Errors::SupplyExhausted);
        }
    }

    let minted = get_minted_at_level(env, type_id, level);

    if let Some(cap) = get_max_supply(env, type_id, level) {
        if minted >= cap {
            panic_with_error!(env, &Errors::SupplyExhausted);
        }
    }

    let id = bump_drill_id(env);

    set_drill(
        env,
        id,
        &Drill {
            id,
            drill_type: type_id,
            level,
        },
    );
    set_drill_count(env, count + 1);
    set_minted_at_level(env, type_id, level, minted + 1);

    AssetRegistryClient::new(env, &get_registry(env)).mint(to, &id);

    id
}
