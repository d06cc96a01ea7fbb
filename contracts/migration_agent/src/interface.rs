// Cross-contract surfaces the agent depends on. Only the functions the agent
// actually calls are declared.

use soroban_sdk::{contractclient, Address, Env};

use crate::Error;

#[allow(dead_code)]
#[contractclient(name = "SourceLedgerClient")]
pub trait SourceLedger {
    fn finalized(env: Env) -> bool;
}

#[allow(dead_code)]
#[contractclient(name = "TargetLedgerClient")]
pub trait TargetLedger {
    fn create_token(env: Env, caller: Address, owner: Address, amount: i128) -> Result<(), Error>;
    fn finalize_migration(env: Env, caller: Address) -> Result<(), Error>;
}
