use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Token movement. `from` is `None` for tokens created by contribution or endowment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transfer {
    pub from: Option<Address>,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refund {
    pub contributor: Address,
    pub value: i128,
    pub tokens: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Migrate {
    pub from: Address,
    pub agent: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundingFinalized {
    pub creator_share: i128,
    pub allocation_share: i128,
    pub total_supply: i128,
    pub raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MigrationAgentSet {
    pub agent: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MigrationMasterSet {
    pub master: Address,
}

pub fn emit_transfer(env: &Env, from: Option<Address>, to: Address, amount: i128) {
    let topics = (symbol_short!("transfer"),);
    let data = Transfer { from, to, amount };
    env.events().publish(topics, data);
}

pub fn emit_refund(env: &Env, contributor: Address, value: i128, tokens: i128) {
    let topics = (symbol_short!("refund"), contributor.clone());
    let data = Refund {
        contributor,
        value,
        tokens,
    };
    env.events().publish(topics, data);
}

pub fn emit_migrate(env: &Env, from: Address, agent: Address, amount: i128) {
    let topics = (symbol_short!("migrate"), from.clone());
    let data = Migrate {
        from,
        agent,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_funding_finalized(
    env: &Env,
    creator_share: i128,
    allocation_share: i128,
    total_supply: i128,
    raised: i128,
) {
    let topics = (symbol_short!("finalized"),);
    let data = FundingFinalized {
        creator_share,
        allocation_share,
        total_supply,
        raised,
    };
    env.events().publish(topics, data);
}

pub fn emit_migration_agent_set(env: &Env, agent: Address) {
    let topics = (symbol_short!("agent_set"),);
    env.events().publish(topics, MigrationAgentSet { agent });
}

pub fn emit_migration_master_set(env: &Env, master: Address) {
    let topics = (symbol_short!("master"),);
    env.events().publish(topics, MigrationMasterSet { master });
}
