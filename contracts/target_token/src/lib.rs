#![no_std]

//! Target ledger for a token migration.
//!
//! Balances on this ledger are created exclusively by the migration agent
//! named at construction, one `create_token` call per migrated amount. Once the
//! agent finalizes the migration no further tokens can ever be created here;
//! balances already migrated stay put and remain freely transferable.

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env};

pub mod events;
mod storage;


use storage::{
    get_agent, get_balance, get_total_supply, is_migration_finalized, set_agent, set_balance,
    set_migration_finalized, set_total_supply,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InsufficientBalance = 4,
    Unauthorized = 6,
    AlreadyFinalized = 7,
    ArithmeticOverflow = 11,
    ZeroAmount = 12,
    InvalidRecipient = 13,
    MigrationFinalized = 15,
    NegativeAmount = 18,
    NotInitialized = 26,
}

#[contract]
pub struct TargetToken;

#[contractimpl]
impl TargetToken {
    /// Deploy the target ledger, bound to the migration agent that will mint into it.
    pub fn __constructor(env: Env, agent: Address) {
        set_agent(&env, &agent);
    }

    /// Create `amount` tokens for `owner`.
    ///
    /// - `caller` must authorize the call and must be the migration agent.
    /// - Fails with `MigrationFinalized` once the agent has closed the migration.
    pub fn create_token(env: Env, caller: Address, owner: Address, amount: i128) -> Result<(), Error> {
        caller.require_auth();

        let agent = get_agent(&env);
        if caller != agent {
            return Err(Error::Unauthorized);
        }
        if is_migration_finalized(&env) {
            return Err(Error::MigrationFinalized);
        }
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        if amount == 0 {
            return Err(Error::ZeroAmount);
        }

        let supply = get_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        let balance = get_balance(&env, &owner)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        set_total_supply(&env, supply);
        set_balance(&env, &owner, balance);

        events::emit_transfer(&env, agent, owner, amount);
        Ok(())
    }

    /// Permanently disable `create_token`. Only the migration agent may call this.
    pub fn finalize_migration(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        if caller != get_agent(&env) {
            return Err(Error::Unauthorized);
        }
        if is_migration_finalized(&env) {
            return Err(Error::AlreadyFinalized);
        }

        set_migration_finalized(&env);
        Ok(())
    }

    /// Move `amount` of migrated tokens from `from` to `to`.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        if to == env.current_contract_address() {
            return Err(Error::InvalidRecipient);
        }

        let from_balance = get_balance(&env, &from);
        if amount > from_balance {
            return Err(Error::InsufficientBalance);
        }

        if from != to {
            let to_balance = get_balance(&env, &to)
                .checked_add(amount)
                .ok_or(Error::ArithmeticOverflow)?;
            set_balance(&env, &from, from_balance - amount);
            set_balance(&env, &to, to_balance);
        }

        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn migration_agent(env: Env) -> Address {
        get_agent(&env)
    }

    pub fn migration_finalized(env: Env) -> bool {
        is_migration_finalized(&env)
    }
}
