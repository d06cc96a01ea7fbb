// contracts/gnt_token/src/funding.rs
//
// Funding window rules: state derivation, config validation and the endowment
// split. Everything here is a pure function of its inputs plus ledger reads.

use soroban_sdk::Env;

use crate::storage::{get_total_supply, is_finalized};
use crate::types::{FundingConfig, FundingState};
use crate::Error;

/// Endowment percentages are expressed out of this value.
pub const PERCENT_DENOMINATOR: u32 = 100;

/// Tokens minted at finalize on top of the contributed supply.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Endowment {
    pub creator_share: i128,
    pub allocation_share: i128,
}

/// Current funding state. Never stored.
pub fn funding_state(env: &Env, config: &FundingConfig) -> FundingState {
    if is_finalized(env) {
        return FundingState::Finalized;
    }
    let sequence = env.ledger().sequence();
    if sequence < config.start_ledger {
        FundingState::NotStarted
    } else if sequence > config.end_ledger || get_total_supply(env) >= config.token_cap {
        FundingState::Closed
    } else {
        FundingState::Open
    }
}

/// Reject configurations the state machine cannot honour.
pub fn validate_config(config: &FundingConfig) -> Result<(), Error> {
    if config.start_ledger > config.end_ledger
        || config.creation_rate <= 0
        || config.funding_min < 0
        || config.token_cap <= 0
    {
        return Err(Error::InvalidConfig);
    }

    // The minimum must be reachable under the cap.
    let min_tokens = config
        .funding_min
        .checked_mul(config.creation_rate)
        .ok_or(Error::InvalidConfig)?;
    if min_tokens > config.token_cap {
        return Err(Error::InvalidConfig);
    }

    match config.creator_percent.checked_add(config.allocation_percent) {
        Some(sum) if sum < PERCENT_DENOMINATOR => Ok(()),
        _ => Err(Error::InvalidConfig),
    }
}

/// Tokens minted for `value` units of contributed value.
pub fn tokens_for(value: i128, creation_rate: i128) -> Result<i128, Error> {
    value
        .checked_mul(creation_rate)
        .ok_or(Error::ArithmeticOverflow)
}

/// Split the endowment for a contributed `supply`.
///
/// `extra = supply * p / (100 - p)` with `p = creator_percent + allocation_percent`,
/// so `extra` is (rounded down) `p` percent of `supply + extra`. The creator gets
/// `extra * creator_percent / p` and the allocation gets the rest.
pub fn endowment(
    supply: i128,
    creator_percent: u32,
    allocation_percent: u32,
) -> Result<Endowment, Error> {
    let percent = creator_percent
        .checked_add(allocation_percent)
        .filter(|p| *p < PERCENT_DENOMINATOR)
        .ok_or(Error::InvalidConfig)?;
    if percent == 0 {
        return Ok(Endowment {
            creator_share: 0,
            allocation_share: 0,
        });
    }

    let extra = supply
        .checked_mul(percent as i128)
        .ok_or(Error::ArithmeticOverflow)?
        / (PERCENT_DENOMINATOR - percent) as i128;
    let creator_share = extra
        .checked_mul(creator_percent as i128)
        .ok_or(Error::ArithmeticOverflow)?
        / percent as i128;

    Ok(Endowment {
        creator_share,
        allocation_share: extra - creator_share,
    })
}
