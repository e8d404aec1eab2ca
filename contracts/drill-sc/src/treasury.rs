use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::{errors::Errors, types::Storage};

pub fn get_treasury(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::Treasury)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::CatalogMissing))
}

pub fn set_treasury(env: &Env, treasury: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::Treasury, treasury);
}

// Payments forward to the treasury in full and synchronously; the catalog
// never holds funds.
pub fn route_payment(env: &Env, currency: &Address, from: &Address, amount: i128) {
    token::Client::new(env, currency).transfer(from, &get_treasury(env), &amount);
}
