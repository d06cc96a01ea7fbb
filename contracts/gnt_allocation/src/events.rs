use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unlocked {
    pub beneficiary: Address,
    pub share_bp: u32,
    pub amount: i128,
}

pub fn emit_unlocked(env: &Env, beneficiary: Address, share_bp: u32, amount: i128) {
    let topics = (symbol_short!("unlocked"), beneficiary.clone());
    let data = Unlocked {
        beneficiary,
        share_bp,
        amount,
    };
    env.events().publish(topics, data);
}
