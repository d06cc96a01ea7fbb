// contracts/gnt_token/src/storage.rs
//
// Storage helpers for GntToken.
//
// Contract-wide values live in instance storage and are read on almost every
// call: the config, the finalized flag, supply and contribution totals, the
// allocation share recorded at finalize, and the migration linkage.
// Per-holder values live in persistent storage:
//   - DataKey::Balance(holder)      → i128 tokens
//   - DataKey::Contribution(holder) → i128 value units, zeroed on refund

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::{types::FundingConfig, Error};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Finalized,
    TotalSupply,
    TotalContributed,
    AllocationEndowment,
    MigrationAgent,
    MigrationMaster,
    TotalMigrated,
    Balance(Address),
    Contribution(Address),
}

// ─────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────

pub fn save_config(env: &Env, config: &FundingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// Load the deployment config. Panics with `Error::NotInitialized` if missing.
pub fn load_config(env: &Env) -> FundingConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

// ─────────────────────────────────────────────────────────
// Funding state
// ─────────────────────────────────────────────────────────

pub fn is_finalized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Finalized)
        .unwrap_or(false)
}

/// One-way: nothing ever writes `false` back.
pub fn set_finalized(env: &Env) {
    env.storage().instance().set(&DataKey::Finalized, &true);
}

pub fn get_total_contributed(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalContributed)
        .unwrap_or(0)
}

pub fn set_total_contributed(env: &Env, total: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalContributed, &total);
}

/// Allocation share minted at finalize; 0 before.
pub fn get_allocation_endowment(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::AllocationEndowment)
        .unwrap_or(0)
}

pub fn set_allocation_endowment(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::AllocationEndowment, &amount);
}

pub fn get_contribution(env: &Env, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(contributor.clone()))
        .unwrap_or(0)
}

pub fn set_contribution(env: &Env, contributor: &Address, value: i128) {
    let key = DataKey::Contribution(contributor.clone());
    if value == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &value);
    }
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

/// Returns 0 for addresses that never held tokens.
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

// ─────────────────────────────────────────────────────────
// Migration linkage
// ─────────────────────────────────────────────────────────

pub fn get_migration_agent(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::MigrationAgent)
}

pub fn set_migration_agent(env: &Env, agent: &Address) {
    env.storage().instance().set(&DataKey::MigrationAgent, agent);
}

pub fn get_migration_master(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::MigrationMaster)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_migration_master(env: &Env, master: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::MigrationMaster, master);
}

pub fn get_total_migrated(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalMigrated)
        .unwrap_or(0)
}

pub fn set_total_migrated(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalMigrated, &total);
}
