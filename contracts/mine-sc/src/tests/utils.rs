#![cfg(test)]

extern crate std;

use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, EnvTestConfig, Ledger},
    token, Address, Env, Vec,
};

use crate::Contract;

// Minimal ownership registry standing in for the external drill NFT
// contract. Only the surface the mine consumes, plus `mint` for seeding.

#[contracttype]
#[derive(Clone)]
pub enum RegistryKey {
    Owner(u64),
    Approved(u64),
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

    pub fn get_approved(env: Env, id: u64) -> Option<Address> {
        env.storage().persistent().get(&RegistryKey::Approved(id))
    }

    pub fn approve(env: Env, owner: Address, operator: Address, id: u64) {
        owner.require_auth();

        env.storage()
            .persistent()
            .set(&RegistryKey::Approved(id), &operator);
    }

    pub fn transfer_from(env: Env, operator: Address, from: Address, to: Address, id: u64) {
        operator.require_auth();

        let owner: Address = env
            .storage()
            .persistent()
            .get(&RegistryKey::Owner(id))
            .unwrap();
        assert_eq!(owner, from);

        if operator != owner {
            let approved: Option<Address> =
                env.storage().persistent().get(&RegistryKey::Approved(id));
            assert_eq!(approved, Some(operator));
        }

        env.storage().persistent().set(&RegistryKey::Owner(id), &to);
        env.storage().persistent().remove(&RegistryKey::Approved(id));
    }
}

// Catalog mock with settable per-drill tables.

#[contracttype]
#[derive(Clone)]
pub enum CatalogKey {
    Power(u64),
    Capacity(u64),
}

#[contract]
pub struct MockCatalog;

#[contractimpl]
impl MockCatalog {
    pub fn set_drill(env: Env, id: u64, power: u32, capacity: u32) {
        env.storage().persistent().set(&CatalogKey::Power(id), &power);
        env.storage()
            .persistent()
            .set(&CatalogKey::Capacity(id), &capacity);
    }

    pub fn get_drill_mining_power(env: Env, drill_id: u64) -> u32 {
        env.storage()
            .persistent()
            .get(&CatalogKey::Power(drill_id))
            .unwrap()
    }

    pub fn get_drill_capacity(env: Env, drill_id: u64) -> u32 {
        env.storage()
            .persistent()
            .get(&CatalogKey::Capacity(drill_id))
            .unwrap()
    }
}

pub struct TestMine {
    pub env: Env,
    pub admin: Address,
    pub treasury: Address,
    pub resource: Address,
    pub cosmic: Address,
    pub registry: Address,
    pub catalog: Address,
    pub mine: Address,
}

pub fn setup_mine(
    base_production: i128,
    capacity_table: &[i128],
    upgrade_costs: &[i128],
) -> TestMine {
    let mut env = Env::default();

    env.set_config(EnvTestConfig {
        capture_snapshot_at_drop: false,
    });

    env.mock_all_auths();

    let admin = Address::generate(&env);
    let treasury = Address::generate(&env);

    let resource_sac = env.register_stellar_asset_contract_v2(admin.clone());
    let cosmic_sac = env.register_stellar_asset_contract_v2(admin.clone());

    let registry = env.register(MockRegistry, ());
    let catalog = env.register(MockCatalog, ());

    let mine = env.register(
        Contract,
        (
            &admin,
            &catalog,
            &registry,
            &resource_sac.address(),
            &cosmic_sac.address(),
            &treasury,
            base_production,
            Vec::from_slice(&env, capacity_table),
            Vec::from_slice(&env, upgrade_costs),
        ),
    );

    // the mine mints rewards, so it takes over the resource asset
    token::StellarAssetClient::new(&env, &resource_sac.address()).set_admin(&mine);

    TestMine {
        env,
        admin,
        treasury,
        resource: resource_sac.address(),
        cosmic: cosmic_sac.address(),
        registry,
        catalog,
        mine,
    }
}

pub fn seed_drill(s: &TestMine, owner: &Address, id: u64, power: u32, capacity: u32) {
    MockRegistryClient::new(&s.env, &s.registry).mint(owner, &id);
    MockCatalogClient::new(&s.env, &s.catalog).set_drill(&id, &power, &capacity);
}

pub fn approve_drill(s: &TestMine, owner: &Address, id: u64) {
    MockRegistryClient::new(&s.env, &s.registry).approve(owner, &s.mine, &id);
}

pub fn forward(env: &Env, secs: u64) {
    env.ledger()
        .set_sequence_number(env.ledger().get().sequence_number + (secs / 5) as u32);
    env.ledger()
        .set_timestamp(env.ledger().get().timestamp + secs);
}
