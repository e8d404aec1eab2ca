#![no_std]

use soroban_sdk::{contract, Address, BytesN, Env};

mod contract;
mod errors;
mod storage;
mod tests;
mod types;

pub use types::Converter;

pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

#[contract]
pub struct Contract;

pub trait ConverterTrait {
    fn convert(env: Env, account: Address, amount: i128) -> i128;

    fn get_converter(env: Env) -> Converter;

    fn update_rate(env: Env, numerator: i128, denominator: i128);

    fn update_wasm(env: Env, hash: BytesN<32>);
}
