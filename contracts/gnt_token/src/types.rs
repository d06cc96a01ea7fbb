// contracts/gnt_token/src/types.rs
//
// Deployment configuration and lifecycle types for GntToken.
//
// `FundingConfig` is passed once to the constructor and never rewritten.
// `FundingState` is not stored: it is derived on every call from the ledger
// sequence, the supply and the finalized flag (see `funding::funding_state`).

use soroban_sdk::{contracttype, Address};

/// Whether the migration master may replace an already configured agent.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MigrationAgentPolicy {
    /// The first agent sticks; later calls fail with `MigrationAgentAlreadySet`.
    SetOnce,
    /// The master may point the ledger at a new agent at any time.
    Replaceable,
}

/// Immutable deployment parameters of the crowdfunding ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundingConfig {
    /// Funding creator: receives the raised value and the authority endowment share.
    pub creator: Address,
    /// Migration master; `None` makes the creator the master.
    pub migration_master: Option<Address>,
    /// `GntAllocation` instance receiving the allocation endowment share.
    pub allocation: Address,
    /// SEP-41 token carrying the contributed value.
    pub value_token: Address,
    /// First ledger sequence of the funding window (inclusive).
    pub start_ledger: u32,
    /// Last ledger sequence of the funding window (inclusive).
    pub end_ledger: u32,
    /// Tokens minted per unit of contributed value.
    pub creation_rate: i128,
    /// Minimum total contribution, in value units, for the funding to succeed.
    pub funding_min: i128,
    /// Ceiling on total supply during funding, in tokens.
    pub token_cap: i128,
    /// Endowment percentage minted to the creator.
    pub creator_percent: u32,
    /// Endowment percentage minted to the allocation contract.
    pub allocation_percent: u32,
    pub agent_policy: MigrationAgentPolicy,
}

/// Lifecycle of the funding phase.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FundingState {
    /// Before `start_ledger`.
    NotStarted,
    /// Inside the window with cap headroom left; contributions accepted.
    Open,
    /// Window ended or cap reached; awaiting finalize (or refunds).
    Closed,
    /// Terminal. Transfers enabled, endowment minted.
    Finalized,
}
