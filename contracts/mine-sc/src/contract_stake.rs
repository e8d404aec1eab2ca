use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contractimpl, panic_with_error, token, Address, Env};

use crate::{
    errors::Errors,
    storage::{
        extend_instance_ttl, get_capacity_table, get_mine, get_stake, get_user_level, has_stake,
        remove_stake, set_stake,
    },
    types::{Mine, Stake},
    AssetRegistryClient, Contract, ContractArgs, ContractClient, DrillCatalogClient, StakeTrait,
    POWER_BASIS,
};

#[contractimpl]
impl StakeTrait for Contract {
    fn stake(env: Env, staker: Address, drill_id: u64) {
        staker.require_auth();

        let mine = get_mine(&env);

        if mine.paused {
            panic_with_error!(&env, &Errors::MinePaused);
        }

        if drill_id == 0 {
            panic_with_error!(&env, &Errors::DrillIdInvalid);
        }

        if has_stake(&env, staker.clone()) {
            panic_with_error!(&env, &Errors::AlreadyStaked);
        }

        let registry = AssetRegistryClient::new(&env, &mine.registry);

        if registry.owner_of(&drill_id) != staker {
            panic_with_error!(&env, &Errors::NotDrillOwner);
        }

        if registry.get_approved(&drill_id) != Some(env.current_contract_address()) {
            panic_with_error!(&env, &Errors::NotApproved);
        }

        registry.transfer_from(
            &env.current_contract_address(),
            &staker,
            &env.current_contract_address(),
            &drill_id,
        );

        set_stake(
            &env,
            staker,
            &Stake {
                drill_id,
                timestamp: env.ledger().timestamp(),
            },
        );

        extend_instance_ttl(&env);
    }

    fn unstake(env: Env, staker: Address) {
        staker.require_auth();

        let mine = get_mine(&env);
        let stake = get_stake(&env, staker.clone())
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::NotStaked));

        let reward = accumulated(&env, &mine, &stake, get_user_level(&env, staker.clone()));

        if reward > 0 {
            token::StellarAssetClient::new(&env, &mine.asset).mint(&staker, &reward);
        }

        AssetRegistryClient::new(&env, &mine.registry).transfer_from(
            &env.current_contract_address(),
            &env.current_contract_address(),
            &staker,
            &stake.drill_id,
        );

        remove_stake(&env, staker);

        extend_instance_ttl(&env);
    }

    fn collect(env: Env, staker: Address) {
        staker.require_auth();

        let mine = get_mine(&env);
        let mut stake = get_stake(&env, staker.clone())
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::NotStaked));

        let reward = accumulated(&env, &mine, &stake, get_user_level(&env, staker.clone()));

        if reward > 0 {
            token::StellarAssetClient::new(&env, &mine.asset).mint(&staker, &reward);
        }

        // the counter restarts even when nothing was minted
        stake.timestamp = env.ledger().timestamp();

        set_stake(&env, staker, &stake);

        extend_instance_ttl(&env);
    }

    fn get_accumulated_resources(env: Env, account: Address) -> i128 {
        match get_stake(&env, account.clone()) {
            None => 0,
            Some(stake) => {
                let mine = get_mine(&env);

                accumulated(&env, &mine, &stake, get_user_level(&env, account))
            }
        }
    }

    fn get_stake(env: Env, account: Address) -> Stake {
        get_stake(&env, account).unwrap_or(Stake {
            drill_id: 0,
            timestamp: 0,
        })
    }
}

// Reward accrued since the last settlement. Production scales with the
// drill's mining power, the ceiling with the account's upgrade level times
// the drill's capacity multiplier. Clamped at the ceiling: time past full
// earns nothing.
fn accumulated(env: &Env, mine: &Mine, stake: &Stake, user_level: u32) -> i128 {
    let catalog = DrillCatalogClient::new(env, &mine.catalog);

    let elapsed = (env.ledger().timestamp() - stake.timestamp) as i128;
    let power = catalog.get_drill_mining_power(&stake.drill_id) as i128;
    let cap_mult = catalog.get_drill_capacity(&stake.drill_id) as i128;

    let raw = mine
        .base_production
        .fixed_mul_floor(env, &(power * elapsed), &POWER_BASIS);

    let capacity = get_capacity_table(env)
        .get(user_level)
        .unwrap_or_else(|| panic_with_error!(env, &Errors::LevelMissing))
        .fixed_mul_floor(env, &cap_mult, &POWER_BASIS);

    raw.min(capacity)
}
