use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Errors {
    MineMissing = 1,
    MinePaused = 2,
    MineNotPaused = 3,
    TableLengthMismatch = 4,
    DrillIdInvalid = 5,
    NotDrillOwner = 6,
    NotApproved = 7,
    AlreadyStaked = 8,
    NotStaked = 9,
    MaxLevelReached = 10,
    LevelMissing = 11,
}
