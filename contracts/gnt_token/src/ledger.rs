// contracts/gnt_token/src/ledger.rs
//
// Balance primitives. Each function computes every new value with checked
// arithmetic before writing anything, so a failing call leaves storage as it
// found it. Supply moves together with balances, which keeps
// `total_supply == Σ balance`.

use soroban_sdk::{Address, Env};

use crate::storage::{get_balance, get_total_supply, set_balance, set_total_supply};
use crate::Error;

/// Credit `amount` new tokens to `to`.
pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    let balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    set_total_supply(env, supply);
    set_balance(env, to, balance);
    Ok(())
}

/// Destroy `amount` tokens held by `from`.
pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let balance = get_balance(env, from);
    if amount > balance {
        return Err(Error::InsufficientBalance);
    }
    let supply = get_total_supply(env)
        .checked_sub(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    set_balance(env, from, balance - amount);
    set_total_supply(env, supply);
    Ok(())
}

/// Move `amount` from `from` to `to`. Supply is unchanged.
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let from_balance = get_balance(env, from);
    if amount > from_balance {
        return Err(Error::InsufficientBalance);
    }
    if from == to {
        return Ok(());
    }
    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    set_balance(env, from, from_balance - amount);
    set_balance(env, to, to_balance);
    Ok(())
}
