use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Mine {
    pub admin: Address,
    pub catalog: Address,
    pub registry: Address,
    pub asset: Address,
    pub upgrade_asset: Address,
    pub treasury: Address,
    pub base_production: i128, // per second at 1.00x mining power
    pub paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Stake {
    pub drill_id: u64,  // 0 = no active stake
    pub timestamp: u64, // epoch seconds at last settlement
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    Mine,               // : Mine
    CapacityTable,      // : Vec<i128>, indexed by user level
    UpgradeCosts,       // : Vec<i128>, cost to advance from level i to i + 1
    Stake(Address),     // (account) : Stake
    UserLevel(Address), // (account) : u32
}
