#![cfg(test)]

extern crate std;

use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, EnvTestConfig},
    Address, Env, String, Vec,
};

use crate::{Contract, ContractClient};

// Minimal ownership registry standing in for the external drill NFT
// contract. Only the surface the catalog consumes.

#[contracttype]
#[derive(Clone)]
pub enum RegistryKey {
    Owner(u64),
}

#[contract]
pub struct MockRegistry;

#[contractimpl]
impl MockRegistry {
    pub fn mint(env: Env, to: Address, id: u64) {
        env.storage().persistent().set(&RegistryKey::Owner(id), &to);
    }

    pub fn owner_of(env: Env, id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&RegistryKey::Owner(id))
            .unwrap()
    }
}

pub struct TestCatalog {
    pub env: Env,
    pub admin: Address,
    pub treasury: Address,
    pub registry: Address,
    pub native: Address,
    pub cosmic: Address,
    pub catalog: Address,
}

pub fn setup_catalog() -> TestCatalog {
    let mut env = Env::default();

    env.set_config(EnvTestConfig {
        capture_snapshot_at_drop: false,
    });

    env.mock_all_auths();

    let admin = Address::generate(&env);
    let treasury = Address::generate(&env);

    let native_sac = env.register_stellar_asset_contract_v2(admin.clone());
    let cosmic_sac = env.register_stellar_asset_contract_v2(admin.clone());

    let registry = env.register(MockRegistry, ());

    let catalog = env.register(
        Contract,
        (
            &admin,
            &registry,
            &native_sac.address(),
            &cosmic_sac.address(),
            &treasury,
        ),
    );

    TestCatalog {
        env,
        admin,
        treasury,
        registry,
        native: native_sac.address(),
        cosmic: cosmic_sac.address(),
        catalog,
    }
}

// Basic Drill: 2e18 native mint, power 1.00x/1.10x/1.21x, flat capacity,
// upgrades cost 1000 then 2000
pub fn add_basic_drill_type(s: &TestCatalog, type_id: u32) {
    ContractClient::new(&s.env, &s.catalog).add_drill_type(
        &type_id,
        &String::from_str(&s.env, "Basic Drill"),
        &2_000_000_000_000_000_000,
        &true,
        &None,
        &2,
        &Vec::from_slice(&s.env, &[100u32, 110, 121]),
        &Vec::from_slice(&s.env, &[100u32, 100, 100]),
        &Vec::from_slice(&s.env, &[0i128, 1000, 2000]),
    );
}
