// contracts/migration_agent/src/storage.rs
//
// Storage helpers for MigrationAgent. Everything lives in instance storage:
// the agent holds a handful of addresses and its lifecycle state.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::{types::AgentState, Error};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Source,
    Master,
    Target,
    State,
}

fn load_address(env: &Env, key: &DataKey) -> Address {
    env.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn get_source(env: &Env) -> Address {
    load_address(env, &DataKey::Source)
}

pub fn set_source(env: &Env, source: &Address) {
    env.storage().instance().set(&DataKey::Source, source);
}

pub fn get_master(env: &Env) -> Address {
    load_address(env, &DataKey::Master)
}

pub fn set_master(env: &Env, master: &Address) {
    env.storage().instance().set(&DataKey::Master, master);
}

pub fn get_target(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Target)
}

pub fn set_target(env: &Env, target: &Address) {
    env.storage().instance().set(&DataKey::Target, target);
}

pub fn get_state(env: &Env) -> AgentState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_state(env: &Env, state: AgentState) {
    env.storage().instance().set(&DataKey::State, &state);
}
