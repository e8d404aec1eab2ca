use soroban_sdk::{contractimpl, panic_with_error, Address, BytesN, Env, Vec};

use crate::{
    errors::Errors,
    storage::{
        extend_instance_ttl, get_capacity_table, get_mine, set_capacity_table, set_mine,
        set_upgrade_costs,
    },
    types::Mine,
    Contract, ContractArgs, ContractClient, MineTrait,
};

#[contractimpl]
impl Contract {
    #[allow(clippy::too_many_arguments)]
    pub fn __constructor(
        env: Env,
        admin: Address,
        catalog: Address,
        registry: Address,
        asset: Address,
        upgrade_asset: Address,
        treasury: Address,
        base_production: i128,
        capacity_table: Vec<i128>,
        upgrade_costs: Vec<i128>,
    ) {
        // capacity_table[l] is the ceiling at user level l, upgrade_costs[l]
        // the cost to leave level l, so the table must be one entry longer
        if capacity_table.is_empty() || capacity_table.len() != upgrade_costs.len() + 1 {
            panic_with_error!(&env, &Errors::TableLengthMismatch);
        }

        set_mine(
            &env,
            &Mine {
                admin,
                catalog,
                registry,
                asset,
                upgrade_asset,
                treasury,
                base_production,
                paused: false,
            },
        );
        set_capacity_table(&env, &capacity_table);
        set_upgrade_costs(&env, &upgrade_costs);

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl MineTrait for Contract {
    fn pause(env: Env) {
        let mut mine = get_mine(&env);

        if mine.paused {
            panic_with_error!(&env, &Errors::MinePaused);
        }

        mine.admin.require_auth();

        mine.paused = true;

        set_mine(&env, &mine);

        // no `extend_instance_ttl` while the mine is paused
    }

    fn unpause(env: Env) {
        let mut mine = get_mine(&env);

        if !mine.paused {
            panic_with_error!(&env, &Errors::MineNotPaused);
        }

        mine.admin.require_auth();

        mine.paused = false;

        set_mine(&env, &mine);

        extend_instance_ttl(&env);
    }

    fn update_treasury(env: Env, treasury: Address) {
        let mut mine = get_mine(&env);

        mine.admin.require_auth();

        mine.treasury = treasury;

        set_mine(&env, &mine);

        extend_instance_ttl(&env);
    }

    fn update_base_production(env: Env, base_production: i128) {
        let mut mine = get_mine(&env);

        mine.admin.require_auth();

        mine.base_production = base_production;

        set_mine(&env, &mine);

        extend_instance_ttl(&env);
    }

    fn update_wasm(env: Env, hash: BytesN<32>) {
        let mine = get_mine(&env);

        mine.admin.require_auth();

        env.deployer().update_current_contract_wasm(hash);

        extend_instance_ttl(&env);
    }

    fn get_mine(env: Env) -> Mine {
        get_mine(&env)
    }

    fn get_capacity_at_level(env: Env, level: u32) -> i128 {
        get_capacity_table(&env)
            .get(level)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::LevelMissing))
    }
}
