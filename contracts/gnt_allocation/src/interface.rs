use soroban_sdk::{contractclient, Address, Env};

use crate::Error;

/// The slice of the token ledger the allocation calls back into.
#[allow(dead_code)]
#[contractclient(name = "LedgerClient")]
pub trait Ledger {
    fn allocation_endowment(env: Env) -> i128;
    fn finalized(env: Env) -> bool;
    fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error>;
}
