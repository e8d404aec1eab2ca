use soroban_sdk::{contracttype, Address, String, Vec};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct DrillType {
    pub name: String,
    pub mint_price: i128, // level-0 price, further levels via MintPrice entries
    pub use_native_currency: bool,
    pub currency: Option<Address>,
    pub max_level: u32,
    pub mining_power: Vec<u32>,         // basis 100, one entry per level
    pub capacity: Vec<u32>,             // basis 100, one entry per level
    pub upgrade_requirement: Vec<i128>, // cost to reach each level, [0] unused
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Drill {
    pub id: u64,
    pub drill_type: u32,
    pub level: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AltMintConfig {
    pub drill_type: u32,
    pub level: u32, // starting level for drills minted through this config
    pub currency: Address,
    pub cost: i128,
    pub max_mints: u32,
    pub minted: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    Admin,                   // : Address
    Registry,                // : Address
    NativeAsset,             // : Address
    UpgradeAsset,            // : Address
    Treasury,                // : Address
    MaxDrillCount,           // : u64
    DrillCount,              // : u64
    DrillId,                 // : u64, last allocated id
    DrillType(u32),          // (type) : DrillType
    Drill(u64),              // (id) : Drill
    MintPrice(u32, u32),     // (type, level) : i128
    MaxSupply(u32, u32),     // (type, level) : u32
    MintedAtLevel(u32, u32), // (type, level) : u32
    AltConfig(u32),          // (config) : AltMintConfig
}
