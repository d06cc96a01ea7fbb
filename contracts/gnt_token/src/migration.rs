use soroban_sdk::{contractclient, Address, Env};

use crate::Error;

/// Entry point of the migration agent the ledger hands burned tokens to.
///
/// Error codes returned by the agent share this crate's numbering, so a
/// rejection surfaces to the holder unchanged.
#[allow(dead_code)]
#[contractclient(name = "MigrationAgentClient")]
pub trait MigrationAgentInterface {
    fn migrate_from(env: Env, caller: Address, from: Address, amount: i128) -> Result<(), Error>;
}
