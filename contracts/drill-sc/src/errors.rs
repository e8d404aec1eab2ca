use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Errors {
    CatalogMissing = 1,
    DrillTypeExists = 2,
    DrillTypeMissing = 3,
    DrillMissing = 4,
    LevelMissing = 5,
    TableLengthMismatch = 6,
    CurrencyMissing = 7,
    InsufficientPayment = 8,
    SupplyExhausted = 9,
    NotDrillOwner = 10,
    MaxLevelReached = 11,
    AltConfigExists = 12,
    AltConfigMissing = 13,
}
