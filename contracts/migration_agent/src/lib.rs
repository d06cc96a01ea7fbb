#![no_std]

//! Migration agent: the relay between a finalized source ledger and the
//! target ledger that replaces it.
//!
//! The agent moves through `AwaitingTarget → Active → Finalized`. Only the
//! recognised source ledger can ask it to mint, and only while `Active`.

use soroban_sdk::{contract, contracterror, contractimpl, log, panic_with_error, Address, Env};

mod events;
mod interface;
mod storage;
mod types;


use interface::{SourceLedgerClient, TargetLedgerClient};
use storage::{
    get_master, get_source, get_state, get_target, set_master, set_source, set_state, set_target,
};
pub use types::AgentState;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 6,
    AlreadyFinalized = 7,
    ZeroAmount = 12,
    MigrationNotEnabled = 14,
    MigrationFinalized = 15,
    NegativeAmount = 18,
    NotFinalized = 20,
    TargetAlreadySet = 22,
    NotInitialized = 26,
}

#[contract]
pub struct MigrationAgent;

#[contractimpl]
impl MigrationAgent {
    /// Deploy an agent for `source`, administered by `master`.
    ///
    /// The source ledger must already have finalized its funding phase.
    pub fn __constructor(env: Env, source: Address, master: Address) {
        if !SourceLedgerClient::new(&env, &source).finalized() {
            panic_with_error!(&env, Error::NotFinalized);
        }

        set_source(&env, &source);
        set_master(&env, &master);
        set_state(&env, AgentState::AwaitingTarget);
    }

    /// Bind the target ledger. Settable once, by the master.
    pub fn set_target_token(env: Env, caller: Address, target: Address) -> Result<(), Error> {
        caller.require_auth();

        if caller != get_master(&env) {
            return Err(Error::Unauthorized);
        }
        match get_state(&env) {
            AgentState::AwaitingTarget => {}
            AgentState::Active => return Err(Error::TargetAlreadySet),
            AgentState::Finalized => return Err(Error::MigrationFinalized),
        }

        set_target(&env, &target);
        set_state(&env, AgentState::Active);

        events::emit_target_set(&env, target);
        Ok(())
    }

    /// Mint `amount` on the target for `from`, on behalf of the source ledger.
    ///
    /// `caller` must be the source ledger, which has already burned the
    /// same amount. Any failure here unwinds that burn.
    pub fn migrate_from(env: Env, caller: Address, from: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();

        if caller != get_source(&env) {
            return Err(Error::Unauthorized);
        }
        match get_state(&env) {
            AgentState::Active => {}
            AgentState::AwaitingTarget => return Err(Error::MigrationNotEnabled),
            AgentState::Finalized => return Err(Error::MigrationFinalized),
        }
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        if amount == 0 {
            return Err(Error::ZeroAmount);
        }

        let target = get_target(&env).ok_or(Error::MigrationNotEnabled)?;
        TargetLedgerClient::new(&env, &target).create_token(
            &env.current_contract_address(),
            &from,
            &amount,
        );

        log!(&env, "migrated", from, amount);
        Ok(())
    }

    /// Close the migration for good. Master only.
    ///
    /// Tokens already migrated stay on the target; the target simply stops
    /// accepting new mints, and so does this agent.
    pub fn finalize_migration(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        if caller != get_master(&env) {
            return Err(Error::Unauthorized);
        }
        match get_state(&env) {
            AgentState::Active => {}
            AgentState::AwaitingTarget => return Err(Error::MigrationNotEnabled),
            AgentState::Finalized => return Err(Error::AlreadyFinalized),
        }

        let target = get_target(&env).ok_or(Error::MigrationNotEnabled)?;
        set_state(&env, AgentState::Finalized);

        TargetLedgerClient::new(&env, &target).finalize_migration(&env.current_contract_address());

        events::emit_migration_finalized(&env, target);
        Ok(())
    }

    pub fn state(env: Env) -> AgentState {
        get_state(&env)
    }

    pub fn source(env: Env) -> Address {
        get_source(&env)
    }

    pub fn target(env: Env) -> Option<Address> {
        get_target(&env)
    }

    pub fn master(env: Env) -> Address {
        get_master(&env)
    }
}
