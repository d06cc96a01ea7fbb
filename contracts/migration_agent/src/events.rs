use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetSet {
    pub target: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MigrationFinalized {
    pub target: Address,
}

pub fn emit_target_set(env: &Env, target: Address) {
    let topics = (symbol_short!("target"),);
    env.events().publish(topics, TargetSet { target });
}

pub fn emit_migration_finalized(env: &Env, target: Address) {
    let topics = (symbol_short!("mig_fin"),);
    env.events().publish(topics, MigrationFinalized { target });
}
