use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Errors {
    ConverterMissing = 1,
    AmountTooLow = 2,
    RateInvalid = 3,
}
