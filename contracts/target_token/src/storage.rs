// contracts/target_token/src/storage.rs
//
// Storage helpers for TargetToken.
//
//   - DataKey::Agent             → Address (instance, set at construction)
//   - DataKey::TotalSupply       → i128    (instance)
//   - DataKey::Finalized         → bool    (instance, monotonic)
//   - DataKey::Balance(holder)   → i128    (persistent)

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::Error;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Agent,
    TotalSupply,
    Finalized,
    Balance(Address),
}

// ─────────────────────────────────────────────────────────
// Migration agent
// ─────────────────────────────────────────────────────────

pub fn set_agent(env: &Env, agent: &Address) {
    env.storage().instance().set(&DataKey::Agent, agent);
}

/// Load the agent. Panics with `Error::NotInitialized` if the constructor never ran.
pub fn get_agent(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Agent)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn is_migration_finalized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Finalized)
        .unwrap_or(false)
}

pub fn set_migration_finalized(env: &Env) {
    env.storage().instance().set(&DataKey::Finalized, &true);
}

// ─────────────────────────────────────────────────────────
// Balances
// ─────────────────────────────────────────────────────────

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

/// Returns 0 for holders that never received a migrated balance.
pub fn get_balance(env: &Env, holder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, holder: &Address, balance: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(holder.clone()), &balance);
}
