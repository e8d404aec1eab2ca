#![cfg(test)]

extern crate std;

use soroban_sdk::{
    testutils::{Address as _, EnvTestConfig},
    token, Address, Env,
};

use crate::Contract;

pub struct TestConverter {
    pub env: Env,
    pub admin: Address,
    pub resource: Address,
    pub cosmic: Address,
    pub converter: Address,
}

pub fn setup_converter(rate_numerator: i128, rate_denominator: i128) -> TestConverter {
    let mut env = Env::default();

    env.set_config(EnvTestConfig {
        capture_snapshot_at_drop: false,
    });

    env.mock_all_auths();

    let admin = Address::generate(&env);

    let resource_sac = env.register_stellar_asset_contract_v2(admin.clone());
    let cosmic_sac = env.register_stellar_asset_contract_v2(admin.clone());

    let converter = env.register(
        Contract,
        (
            &admin,
            &resource_sac.address(),
            &cosmic_sac.address(),
            rate_numerator,
            rate_denominator,
        ),
    );

    // the converter mints cosmic cash, so it takes over that asset
    token::StellarAssetClient::new(&env, &cosmic_sac.address()).set_admin(&converter);

    TestConverter {
        env,
        admin,
        resource: resource_sac.address(),
        cosmic: cosmic_sac.address(),
        converter,
    }
}
