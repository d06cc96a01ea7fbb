// contracts/gnt_allocation/src/storage.rs
//
// Storage helpers for GntAllocation.
//
//   - DataKey::Token / Creator / UnlockAt / Unassigned   (instance, set at construction)
//   - DataKey::AllocationTotal                           (instance, set on first unlock)
//   - DataKey::Share(beneficiary)    → u32  basis points (persistent)
//   - DataKey::Unlocked(beneficiary) → bool              (persistent, monotonic)

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::Error;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Token,
    Creator,
    UnlockAt,
    Unassigned,
    AllocationTotal,
    Share(Address),
    Unlocked(Address),
}

// ─────────────────────────────────────────────────────────
// Deployment parameters
// ─────────────────────────────────────────────────────────

pub fn get_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_creator(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Creator)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_creator(env: &Env, creator: &Address) {
    env.storage().instance().set(&DataKey::Creator, creator);
}

pub fn get_unlock_at(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::UnlockAt)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_unlock_at(env: &Env, unlock_at: u64) {
    env.storage().instance().set(&DataKey::UnlockAt, &unlock_at);
}

pub fn get_unassigned_bp(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Unassigned)
        .unwrap_or(0)
}

pub fn set_unassigned_bp(env: &Env, bp: u32) {
    env.storage().instance().set(&DataKey::Unassigned, &bp);
}

// ─────────────────────────────────────────────────────────
// Payout bookkeeping
// ─────────────────────────────────────────────────────────

pub fn get_allocation_total(env: &Env) -> Option<i128> {
    env.storage().instance().get(&DataKey::AllocationTotal)
}

pub fn set_allocation_total(env: &Env, total: i128) {
    env.storage()
        .instance()
        .set(&DataKey::AllocationTotal, &total);
}

/// Table share of `beneficiary`, 0 when absent. Excludes the creator remainder.
pub fn get_share(env: &Env, beneficiary: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Share(beneficiary.clone()))
        .unwrap_or(0)
}

pub fn set_share(env: &Env, beneficiary: &Address, share_bp: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::Share(beneficiary.clone()), &share_bp);
}

pub fn is_unlocked(env: &Env, beneficiary: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Unlocked(beneficiary.clone()))
        .unwrap_or(false)
}

pub fn set_unlocked(env: &Env, beneficiary: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Unlocked(beneficiary.clone()), &true);
}
