use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Balance movement. `from` is the migration agent for migrated mints.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    let topics = (symbol_short!("transfer"),);
    let data = Transfer { from, to, amount };
    env.events().publish(topics, data);
}
