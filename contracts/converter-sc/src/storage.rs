use soroban_sdk::{panic_with_error, Env};

use crate::{
    errors::Errors,
    types::{Converter, Storage},
    WEEK_OF_LEDGERS,
};

pub fn extend_instance_ttl(env: &Env) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn get_converter(env: &Env) -> Converter {
    env.storage()
        .instance()
        .get::<Storage, Converter>(&Storage::Converter)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::ConverterMissing))
}
pub fn set_converter(env: &Env, converter: &Converter) {
    env.storage()
        .instance()
        .set::<Storage, Converter>(&Storage::Converter, converter);
}
