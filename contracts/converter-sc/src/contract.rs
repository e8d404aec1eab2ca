use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contractimpl, panic_with_error, token, Address, BytesN, Env};

use crate::{
    errors::Errors,
    storage::{extend_instance_ttl, get_converter, set_converter},
    types::Converter,
    Contract, ContractArgs, ContractClient, ConverterTrait,
};

#[contractimpl]
impl Contract {
    pub fn __constructor(
        env: Env,
        admin: Address,
        resource: Address,
        cosmic: Address,
        rate_numerator: i128,
        rate_denominator: i128,
    ) {
        if rate_numerator <= 0 || rate_denominator <= 0 {
            panic_with_error!(&env, &Errors::RateInvalid);
        }

        set_converter(
            &env,
            &Converter {
                admin,
                resource,
                cosmic,
                rate_numerator,
                rate_denominator,
            },
        );

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl ConverterTrait for Contract {
    fn convert(env: Env, account: Address, amount: i128) -> i128 {
        account.require_auth();

        let converter = get_converter(&env);

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountTooLow);
        }

        let out = amount.fixed_mul_floor(
            &env,
            &converter.rate_numerator,
            &converter.rate_denominator,
        );

        // the resource leaves circulation, cosmic cash enters it
        token::Client::new(&env, &converter.resource).burn(&account, &amount);

        if out > 0 {
            token::StellarAssetClient::new(&env, &converter.cosmic).mint(&account, &out);
        }

        extend_instance_ttl(&env);

        out
    }

    fn get_converter(env: Env) -> Converter {
        get_converter(&env)
    }

    fn update_rate(env: Env, numerator: i128, denominator: i128) {
        let mut converter = get_converter(&env);

        converter.admin.require_auth();

        if numerator <= 0 || denominator <= 0 {
            panic_with_error!(&env, &Errors::RateInvalid);
        }

        converter.rate_numerator = numerator;
        converter.rate_denominator = denominator;

        set_converter(&env, &converter);

        extend_instance_ttl(&env);
    }

    fn update_wasm(env: Env, hash: BytesN<32>) {
        let converter = get_converter(&env);

        converter.admin.require_auth();

        env.deployer().update_current_contract_wasm(hash);

        extend_instance_ttl(&env);
    }
}
