// contracts/gnt_token/src/test_migration.rs
//
// End-to-end migration: GntToken burns, MigrationAgent relays, TargetToken mints.

extern crate std;

use migration_agent::{AgentState, MigrationAgent, MigrationAgentClient};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, TryIntoVal,
};
use target_token::{TargetToken, TargetTokenClient};

use crate::events::Migrate;
use crate::test_setup::{setup, setup_with, Funding};
use crate::{Error, MigrationAgentPolicy};

const HOLDING: i128 = 150_000_000;

// ─── Helpers ─────────────────────────────────────────────

struct Migration {
    f: Funding,
    holder: Address,
    agent: MigrationAgentClient<'static>,
    target: TargetTokenClient<'static>,
}

fn deploy_agent(f: &Funding) -> (MigrationAgentClient<'static>, TargetTokenClient<'static>) {
    let agent_id = f
        .env
        .register(MigrationAgent, (f.gnt.address.clone(), f.creator.clone()));
    let target_id = f.env.register(TargetToken, (agent_id.clone(),));
    (
        MigrationAgentClient::new(&f.env, &agent_id),
        TargetTokenClient::new(&f.env, &target_id),
    )
}

/// Finalized funding with an active agent wired in by the creator.
fn setup_migration() -> Migration {
    let f = setup();
    let holder = f.finalize_at_minimum();

    let (agent, target) = deploy_agent(&f);
    agent.set_target_token(&f.creator, &target.address);
    f.gnt.set_migration_agent(&f.creator, &agent.address);

    Migration {
        f,
        holder,
        agent,
        target,
    }
}

// ─── Wiring ──────────────────────────────────────────────

#[test]
fn test_set_agent_before_finalize_fails() {
    let f = setup();
    let agent = Address::generate(&f.env);

    assert_eq!(
        f.gnt.try_set_migration_agent(&f.creator, &agent),
        Err(Ok(Error::NotFinalized))
    );
}

#[test]
fn test_set_agent_by_stranger_fails() {
    let f = setup();
    f.finalize_at_minimum();
    let stranger = Address::generate(&f.env);

    assert_eq!(
        f.gnt.try_set_migration_agent(&stranger, &stranger),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(f.gnt.migration_agent(), None);
}

#[test]
fn test_set_agent_once_policy() {
    let m = setup_migration();
    let other = Address::generate(&m.f.env);

    assert_eq!(
        m.f.gnt.try_set_migration_agent(&m.f.creator, &other),
        Err(Ok(Error::MigrationAgentAlreadySet))
    );
    assert_eq!(m.f.gnt.migration_agent(), Some(m.agent.address.clone()));
}

#[test]
fn test_replaceable_agent_policy() {
    let f = setup_with(|config| config.agent_policy = MigrationAgentPolicy::Replaceable);
    f.finalize_at_minimum();
    let first = Address::generate(&f.env);
    let second = Address::generate(&f.env);

    f.gnt.set_migration_agent(&f.creator, &first);
    f.gnt.set_migration_agent(&f.creator, &second);

    assert_eq!(f.gnt.migration_agent(), Some(second));
}

#[test]
fn test_migration_master_handover() {
    let f = setup();
    f.finalize_at_minimum();
    let new_master = Address::generate(&f.env);
    let agent = Address::generate(&f.env);

    f.gnt.set_migration_master(&f.creator, &new_master);

    assert_eq!(f.gnt.migration_master(), new_master);
    assert_eq!(
        f.gnt.try_set_migration_master(&f.creator, &f.creator),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        f.gnt.try_set_migration_agent(&f.creator, &agent),
        Err(Ok(Error::Unauthorized))
    );
    f.gnt.set_migration_agent(&new_master, &agent);
}

#[test]
#[should_panic(expected = "Error(Contract, #20)")]
fn test_agent_for_unfinalized_source_panics() {
    let f = setup();
    deploy_agent(&f);
}

// ─── migrate ─────────────────────────────────────────────

#[test]
fn test_migrate_without_agent_fails() {
    let f = setup();
    let holder = f.finalize_at_minimum();

    assert_eq!(
        f.gnt.try_migrate(&holder, &1),
        Err(Ok(Error::MigrationNotEnabled))
    );
}

#[test]
fn test_migrate_moves_balance_to_target() {
    let m = setup_migration();
    let supply = m.f.gnt.total_supply();

    m.f.gnt.migrate(&m.holder, &HOLDING);

    assert_eq!(m.f.gnt.balance(&m.holder), 0);
    assert_eq!(m.f.gnt.total_supply(), supply - HOLDING);
    assert_eq!(m.f.gnt.total_migrated(), HOLDING);
    assert_eq!(m.target.balance(&m.holder), HOLDING);
    assert_eq!(m.target.total_supply(), HOLDING);

    assert_eq!(
        m.f.gnt.try_migrate(&m.holder, &1),
        Err(Ok(Error::InsufficientBalance))
    );
    assert_eq!(m.f.gnt.total_migrated(), HOLDING);
    assert_eq!(m.target.balance(&m.holder), HOLDING);
}

#[test]
fn test_partial_migrations_accumulate() {
    let m = setup_migration();

    m.f.gnt.migrate(&m.holder, &1_000);
    m.f.gnt.migrate(&m.holder, &2_500);
    m.f.gnt.migrate(&m.holder, &(HOLDING - 3_500));

    assert_eq!(m.f.gnt.balance(&m.holder), 0);
    assert_eq!(m.target.balance(&m.holder), HOLDING);
    assert_eq!(m.f.gnt.total_migrated(), HOLDING);
}

#[test]
fn test_migrate_emits_event() {
    let m = setup_migration();

    m.f.gnt.migrate(&m.holder, &7);

    let source_event = m
        .f
        .env
        .events()
        .all()
        .iter()
        .filter(|event| event.0 == m.f.gnt.address)
        .last()
        .expect("No events found");
    assert_eq!(
        source_event.1,
        vec![
            &m.f.env,
            symbol_short!("migrate").into_val(&m.f.env),
            m.holder.clone().into_val(&m.f.env),
        ]
    );
    let data: Migrate = source_event.2.try_into_val(&m.f.env).unwrap();
    assert_eq!(
        data,
        Migrate {
            from: m.holder.clone(),
            agent: m.agent.address.clone(),
            amount: 7,
        }
    );
}

#[test]
fn test_migrate_rejects_bad_amounts() {
    let m = setup_migration();

    assert_eq!(
        m.f.gnt.try_migrate(&m.holder, &0),
        Err(Ok(Error::ZeroAmount))
    );
    assert_eq!(
        m.f.gnt.try_migrate(&m.holder, &-5),
        Err(Ok(Error::NegativeAmount))
    );
    assert_eq!(
        m.f.gnt.try_migrate(&m.holder, &(HOLDING + 1)),
        Err(Ok(Error::InsufficientBalance))
    );
    assert_eq!(m.target.total_supply(), 0);
}

#[test]
fn test_migrate_before_target_is_set_rolls_back() {
    let f = setup();
    let holder = f.finalize_at_minimum();
    let (agent, _target) = deploy_agent(&f);
    f.gnt.set_migration_agent(&f.creator, &agent.address);
    assert_eq!(agent.state(), AgentState::AwaitingTarget);

    assert_eq!(
        f.gnt.try_migrate(&holder, &100),
        Err(Ok(Error::MigrationNotEnabled))
    );
    assert_eq!(f.gnt.balance(&holder), HOLDING);
    assert_eq!(f.gnt.total_migrated(), 0);
}

#[test]
fn test_migrate_after_migration_finalized_fails() {
    let m = setup_migration();
    m.f.gnt.migrate(&m.holder, &1_000);

    m.agent.finalize_migration(&m.f.creator);
    assert!(m.target.migration_finalized());

    assert_eq!(
        m.f.gnt.try_migrate(&m.holder, &1_000),
        Err(Ok(Error::MigrationFinalized))
    );
    assert_eq!(m.f.gnt.balance(&m.holder), HOLDING - 1_000);
    assert_eq!(m.f.gnt.total_migrated(), 1_000);
    assert_eq!(m.target.balance(&m.holder), 1_000);
}

#[test]
fn test_migrated_tokens_move_on_target() {
    let m = setup_migration();
    let friend = Address::generate(&m.f.env);
    m.f.gnt.migrate(&m.holder, &500);
    m.agent.finalize_migration(&m.f.creator);

    m.target.transfer(&m.holder, &friend, &200);

    assert_eq!(m.target.balance(&m.holder), 300);
    assert_eq!(m.target.balance(&friend), 200);
}
