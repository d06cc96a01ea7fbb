#![no_std]

//! Time-locked allocation of the endowment share reserved for stakeholders.
//!
//! The token ledger mints the allocation share of the endowment to this
//! contract at funding finalize. After `unlock_at` each beneficiary may
//! withdraw, exactly once, `share_bp / 10_000` of the amount the ledger minted
//! here at finalize. Tokens transferred in later are not distributed. Basis
//! points not assigned to any beneficiary belong to the funding creator.

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env, Vec};

mod events;
mod interface;
mod storage;
mod types;


use interface::LedgerClient;
use storage::{
    get_allocation_total, get_creator, get_share, get_token, get_unassigned_bp, get_unlock_at,
    is_unlocked, set_allocation_total, set_creator, set_share, set_token, set_unassigned_bp,
    set_unlock_at, set_unlocked,
};
pub use types::{AllocationShare, BPS_DENOMINATOR};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    ArithmeticOverflow = 11,
    TooEarly = 16,
    AlreadyUnlocked = 17,
    NotFinalized = 20,
    InvalidConfig = 23,
    NotBeneficiary = 24,
    NotInitialized = 26,
}

#[contract]
pub struct GntAllocation;

#[contractimpl]
impl GntAllocation {
    /// Deploy the allocation.
    ///
    /// - `token` is the ledger whose finalize endowment this contract distributes.
    /// - `creator` receives the basis points left unassigned by `shares`.
    /// - `shares` must have positive, non-duplicated entries summing to at most 10 000 bp.
    /// - `unlock_at` is the ledger timestamp from which `unlock` is allowed.
    pub fn __constructor(
        env: Env,
        token: Address,
        creator: Address,
        shares: Vec<AllocationShare>,
        unlock_at: u64,
    ) {
        let mut assigned: u32 = 0;
        for entry in shares.iter() {
            if entry.share_bp == 0 || get_share(&env, &entry.beneficiary) != 0 {
                panic_with_error!(&env, Error::InvalidConfig);
            }
            assigned = match assigned.checked_add(entry.share_bp) {
                Some(sum) if sum <= BPS_DENOMINATOR => sum,
                _ => panic_with_error!(&env, Error::InvalidConfig),
            };
            set_share(&env, &entry.beneficiary, entry.share_bp);
        }

        set_token(&env, &token);
        set_creator(&env, &creator);
        set_unassigned_bp(&env, BPS_DENOMINATOR - assigned);
        set_unlock_at(&env, unlock_at);
    }

    /// Withdraw the caller's share of the allocation.
    ///
    /// - `beneficiary` must authorize the call.
    /// - Fails with `TooEarly` before `unlock_at` and `AlreadyUnlocked` on a second call.
    ///
    /// Returns the number of tokens transferred.
    pub fn unlock(env: Env, beneficiary: Address) -> Result<i128, Error> {
        beneficiary.require_auth();

        if env.ledger().timestamp() < get_unlock_at(&env) {
            return Err(Error::TooEarly);
        }

        let share_bp = Self::share_of(env.clone(), beneficiary.clone());
        if share_bp == 0 {
            return Err(Error::NotBeneficiary);
        }
        if is_unlocked(&env, &beneficiary) {
            return Err(Error::AlreadyUnlocked);
        }

        let ledger = LedgerClient::new(&env, &get_token(&env));
        if !ledger.finalized() {
            return Err(Error::NotFinalized);
        }

        // Pin the pool to the amount minted at finalize; tokens sent here
        // afterwards are not distributed.
        let total = match get_allocation_total(&env) {
            Some(total) => total,
            None => {
                let total = ledger.allocation_endowment();
                set_allocation_total(&env, total);
                total
            }
        };

        let payout = total
            .checked_mul(share_bp as i128)
            .ok_or(Error::ArithmeticOverflow)?
            / BPS_DENOMINATOR as i128;

        set_unlocked(&env, &beneficiary);

        ledger.transfer(&env.current_contract_address(), &beneficiary, &payout);

        events::emit_unlocked(&env, beneficiary, share_bp, payout);
        Ok(payout)
    }

    /// Basis points owed to `beneficiary`, including the creator's unassigned remainder.
    pub fn share_of(env: Env, beneficiary: Address) -> u32 {
        let mut share = get_share(&env, &beneficiary);
        if beneficiary == get_creator(&env) {
            share += get_unassigned_bp(&env);
        }
        share
    }

    pub fn is_unlocked(env: Env, beneficiary: Address) -> bool {
        is_unlocked(&env, &beneficiary)
    }

    pub fn unlock_at(env: Env) -> u64 {
        get_unlock_at(&env)
    }

    /// Pool size used for payouts, read from the ledger at the first withdrawal.
    pub fn allocation_total(env: Env) -> Option<i128> {
        get_allocation_total(&env)
    }

    pub fn token(env: Env) -> Address {
        get_token(&env)
    }

    pub fn creator(env: Env) -> Address {
        get_creator(&env)
    }
}
