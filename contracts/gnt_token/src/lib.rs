#![no_std]

//! GntToken: a crowdfunded token ledger.
//!
//! The contract runs through three phases, all on one balance table:
//!
//! 1. **Funding.** Between `start_ledger` and `end_ledger` anyone may
//!    contribute the value token and receive `value * creation_rate` new
//!    tokens, up to `token_cap`. Transfers are locked.
//! 2. **Settlement.** Once the window closes, either the minimum was reached
//!    and `finalize` mints the endowment, pays the raised value to the creator
//!    and unlocks transfers, or it was missed and every contributor can
//!    `refund`.
//! 3. **Migration.** After finalize the migration master may wire in a
//!    migration agent. Holders then burn here and receive the same amount on
//!    the target ledger, in a single all-or-nothing call.

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, token, Address, Env};

#[cfg(test)]
extern crate std;

pub mod events;
mod funding;
mod ledger;
mod migration;
mod storage;
mod types;

#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_migration;

use funding::{endowment, tokens_for, validate_config};
use migration::MigrationAgentClient;
use storage::{
    get_allocation_endowment, get_balance, get_contribution, get_migration_agent,
    get_migration_master, get_total_contributed, get_total_migrated, get_total_supply,
    is_finalized, load_config, save_config, set_allocation_endowment, set_contribution,
    set_finalized, set_total_contributed, set_total_migrated,
};
pub use types::{FundingConfig, FundingState, MigrationAgentPolicy};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotOpen = 1,
    ZeroValue = 2,
    CapExceeded = 3,
    InsufficientBalance = 4,
    TransferLocked = 5,
    Unauthorized = 6,
    AlreadyFinalized = 7,
    NotClosed = 8,
    RefundNotAvailable = 9,
    NothingToRefund = 10,
    ArithmeticOverflow = 11,
    ZeroAmount = 12,
    InvalidRecipient = 13,
    MigrationNotEnabled = 14,
    MigrationFinalized = 15,
    NegativeAmount = 18,
    MinimumNotReached = 19,
    NotFinalized = 20,
    MigrationAgentAlreadySet = 21,
    InvalidConfig = 23,
    MigrationFailed = 25,
    NotInitialized = 26,
}

#[contract]
pub struct GntToken;

#[contractimpl]
impl GntToken {
    /// Deploy the ledger with its immutable funding parameters.
    ///
    /// Panics with `InvalidConfig` if the window is inverted, the rate or cap
    /// is not positive, the minimum cannot fit under the cap, or the endowment
    /// percentages add up to 100 or more.
    pub fn __constructor(env: Env, config: FundingConfig) {
        if let Err(err) = validate_config(&config) {
            panic_with_error!(&env, err);
        }

        let master = config
            .migration_master
            .clone()
            .unwrap_or_else(|| config.creator.clone());
        storage::set_migration_master(&env, &master);
        save_config(&env, &config);
    }

    // ─────────────────────────────────────────────────────────
    // Ledger
    // ─────────────────────────────────────────────────────────

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    /// Move tokens between holders. Locked until funding is finalized.
    ///
    /// - `from` must authorize the call.
    /// - Zero-amount transfers succeed and still emit an event.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        if !is_finalized(&env) {
            return Err(Error::TransferLocked);
        }
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        if to == env.current_contract_address() {
            return Err(Error::InvalidRecipient);
        }

        ledger::move_balance(&env, &from, &to, amount)?;

        events::emit_transfer(&env, Some(from), to, amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Contribute `value` units of the value token while funding is open.
    ///
    /// Mints `value * creation_rate` tokens to `contributor`. A contribution
    /// that would push the supply above the cap is rejected whole.
    ///
    /// Returns the number of tokens minted.
    pub fn contribute(env: Env, contributor: Address, value: i128) -> Result<i128, Error> {
        contributor.require_auth();

        let config = load_config(&env);
        if funding::funding_state(&env, &config) != FundingState::Open {
            return Err(Error::NotOpen);
        }
        if value < 0 {
            return Err(Error::NegativeAmount);
        }
        if value == 0 {
            return Err(Error::ZeroValue);
        }

        let tokens = tokens_for(value, config.creation_rate)?;
        let new_supply = get_total_supply(&env)
            .checked_add(tokens)
            .ok_or(Error::ArithmeticOverflow)?;
        if new_supply > config.token_cap {
            return Err(Error::CapExceeded);
        }
        let contribution = get_contribution(&env, &contributor)
            .checked_add(value)
            .ok_or(Error::ArithmeticOverflow)?;
        let total = get_total_contributed(&env)
            .checked_add(value)
            .ok_or(Error::ArithmeticOverflow)?;

        ledger::mint(&env, &contributor, tokens)?;
        set_contribution(&env, &contributor, contribution);
        set_total_contributed(&env, total);

        token::Client::new(&env, &config.value_token).transfer(
            &contributor,
            &env.current_contract_address(),
            &value,
        );

        events::emit_transfer(&env, None, contributor, tokens);
        Ok(tokens)
    }

    /// Return a contributor's value after a funding that missed its minimum.
    ///
    /// Burns the tokens the contribution minted and pays the recorded value
    /// back. Returns the value refunded.
    pub fn refund(env: Env, contributor: Address) -> Result<i128, Error> {
        contributor.require_auth();

        let config = load_config(&env);
        let total = get_total_contributed(&env);
        let closed = funding::funding_state(&env, &config) == FundingState::Closed;
        if !closed || total >= config.funding_min {
            return Err(Error::RefundNotAvailable);
        }

        let value = get_contribution(&env, &contributor);
        if value == 0 {
            return Err(Error::NothingToRefund);
        }
        let tokens = tokens_for(value, config.creation_rate)?;

        ledger::burn(&env, &contributor, tokens)?;
        set_contribution(&env, &contributor, 0);
        set_total_contributed(&env, total - value);

        events::emit_refund(&env, contributor.clone(), value, tokens);

        token::Client::new(&env, &config.value_token).transfer(
            &env.current_contract_address(),
            &contributor,
            &value,
        );
        Ok(value)
    }

    /// Close a successful funding.
    ///
    /// Mints the endowment to the creator and the allocation contract, unlocks
    /// transfers and pays the raised value to the creator. Callable by anyone,
    /// exactly once, while the funding is `Closed` with the minimum reached.
    pub fn finalize(env: Env) -> Result<(), Error> {
        let config = load_config(&env);
        match funding::funding_state(&env, &config) {
            FundingState::Closed => {}
            FundingState::Finalized => return Err(Error::AlreadyFinalized),
            FundingState::NotStarted | FundingState::Open => return Err(Error::NotClosed),
        }
        if get_total_contributed(&env) < config.funding_min {
            return Err(Error::MinimumNotReached);
        }

        let supply = get_total_supply(&env);
        let split = endowment(supply, config.creator_percent, config.allocation_percent)?;

        ledger::mint(&env, &config.creator, split.creator_share)?;
        ledger::mint(&env, &config.allocation, split.allocation_share)?;
        set_allocation_endowment(&env, split.allocation_share);
        set_finalized(&env);

        let value_token = token::Client::new(&env, &config.value_token);
        let raised = value_token.balance(&env.current_contract_address());
        if raised > 0 {
            value_token.transfer(&env.current_contract_address(), &config.creator, &raised);
        }

        events::emit_transfer(&env, None, config.creator.clone(), split.creator_share);
        events::emit_transfer(&env, None, config.allocation.clone(), split.allocation_share);
        events::emit_funding_finalized(
            &env,
            split.creator_share,
            split.allocation_share,
            get_total_supply(&env),
            raised,
        );
        Ok(())
    }

    pub fn funding_state(env: Env) -> FundingState {
        funding::funding_state(&env, &load_config(&env))
    }

    pub fn funding_active(env: Env) -> bool {
        Self::funding_state(env) == FundingState::Open
    }

    pub fn finalized(env: Env) -> bool {
        is_finalized(&env)
    }

    /// Tokens that can still be created by contribution; 0 unless funding is open.
    pub fn tokens_left(env: Env) -> i128 {
        let config = load_config(&env);
        if funding::funding_state(&env, &config) != FundingState::Open {
            return 0;
        }
        config.token_cap - get_total_supply(&env)
    }

    /// Tokens minted to the allocation contract at finalize. Later transfers
    /// into the allocation do not change it.
    pub fn allocation_endowment(env: Env) -> i128 {
        get_allocation_endowment(&env)
    }

    pub fn contribution_of(env: Env, contributor: Address) -> i128 {
        get_contribution(&env, &contributor)
    }

    pub fn total_contributed(env: Env) -> i128 {
        get_total_contributed(&env)
    }

    pub fn config(env: Env) -> FundingConfig {
        load_config(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Migration
    // ─────────────────────────────────────────────────────────

    /// Point the ledger at a migration agent. Migration master only, after finalize.
    pub fn set_migration_agent(env: Env, caller: Address, agent: Address) -> Result<(), Error> {
        caller.require_auth();

        if caller != get_migration_master(&env) {
            return Err(Error::Unauthorized);
        }
        if !is_finalized(&env) {
            return Err(Error::NotFinalized);
        }
        if get_migration_agent(&env).is_some()
            && load_config(&env).agent_policy == MigrationAgentPolicy::SetOnce
        {
            return Err(Error::MigrationAgentAlreadySet);
        }

        storage::set_migration_agent(&env, &agent);

        events::emit_migration_agent_set(&env, agent);
        Ok(())
    }

    /// Hand the migration master role to `new_master`.
    pub fn set_migration_master(env: Env, caller: Address, new_master: Address) -> Result<(), Error> {
        caller.require_auth();

        if caller != get_migration_master(&env) {
            return Err(Error::Unauthorized);
        }

        storage::set_migration_master(&env, &new_master);

        events::emit_migration_master_set(&env, new_master);
        Ok(())
    }

    /// Burn `amount` of `from`'s tokens and have the agent mint them on the target.
    ///
    /// Any rejection by the agent or the target fails the whole call, so the
    /// burn never outlives a failed mint.
    pub fn migrate(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        let agent = get_migration_agent(&env).ok_or(Error::MigrationNotEnabled)?;
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        if amount == 0 {
            return Err(Error::ZeroAmount);
        }
        let migrated = get_total_migrated(&env)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        ledger::burn(&env, &from, amount)?;
        set_total_migrated(&env, migrated);

        match MigrationAgentClient::new(&env, &agent).try_migrate_from(
            &env.current_contract_address(),
            &from,
            &amount,
        ) {
            Ok(Ok(())) => {}
            Err(Ok(err)) => return Err(err),
            _ => return Err(Error::MigrationFailed),
        }

        events::emit_migrate(&env, from, agent, amount);
        Ok(())
    }

    pub fn migration_agent(env: Env) -> Option<Address> {
        get_migration_agent(&env)
    }

    pub fn migration_master(env: Env) -> Address {
        get_migration_master(&env)
    }

    pub fn total_migrated(env: Env) -> i128 {
        get_total_migrated(&env)
    }
}
