use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Converter {
    pub admin: Address,
    pub resource: Address,
    pub cosmic: Address,
    pub rate_numerator: i128,
    pub rate_denominator: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    Converter, // : Converter
}
