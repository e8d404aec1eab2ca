use soroban_sdk::{contractimpl, panic_with_error, token, Address, Env};

use crate::{
    errors::Errors,
    storage::{extend_instance_ttl, get_mine, get_upgrade_costs, get_user_level, set_user_level},
    Contract, ContractArgs, ContractClient, UpgradeTrait,
};

#[contractimpl]
impl UpgradeTrait for Contract {
    fn upgrade(env: Env, account: Address) {
        account.require_auth();

        let mine = get_mine(&env);
        let level = get_user_level(&env, account.clone());

        let cost = get_upgrade_costs(&env)
            .get(level)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::MaxLevelReached));

        token::Client::new(&env, &mine.upgrade_asset).transfer(&account, &mine.treasury, &cost);

        // the stake slot is untouched: the next accrual read simply clamps
        // against the larger capacity
        set_user_level(&env, account, level + 1);

        extend_instance_ttl(&env);
    }

    fn get_user_level(env: Env, account: Address) -> u32 {
        get_user_level(&env, account)
    }

    fn get_upgrade_cost(env: Env, account: Address) -> i128 {
        let level = get_user_level(&env, account);

        get_upgrade_costs(&env)
            .get(level)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::MaxLevelReached))
    }
}
