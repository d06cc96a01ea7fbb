use soroban_sdk::{contracttype, Address};

/// 100% expressed in basis points.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// One row of the allocation table.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationShare {
    pub beneficiary: Address,
    /// Share of the allocation pool in basis points (10 000 = 100%).
    pub share_bp: u32,
}
