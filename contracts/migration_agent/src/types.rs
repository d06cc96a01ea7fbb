use soroban_sdk::contracttype;

/// Lifecycle of a migration agent.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AgentState {
    /// Deployed against a finalized source; no target ledger bound yet.
    AwaitingTarget,
    /// Target bound; the source may relay migrations.
    Active,
    /// Terminal. No further mints are relayed.
    Finalized,
}
