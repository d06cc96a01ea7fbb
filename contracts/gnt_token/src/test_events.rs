extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, TryIntoVal, Val, Vec,
};

use crate::events::{FundingFinalized, MigrationMasterSet, Refund, Transfer};
use crate::test_setup::{setup, MIN, RATE};

/// Latest event published by `contract`, skipping value-token events.
fn last_event_from(env: &Env, contract: &Address) -> (Vec<Val>, Val) {
    let (_, topics, data) = env
        .events()
        .all()
        .iter()
        .filter(|event| event.0 == *contract)
        .last()
        .expect("No events found");
    (topics, data)
}

#[test]
fn test_contribute_emits_mint_transfer() {
    let f = setup();
    f.open_window();
    let contributor = f.funded_account(250);

    f.gnt.contribute(&contributor, &250);

    let (topics, data) = last_event_from(&f.env, &f.gnt.address);
    assert_eq!(
        topics,
        vec![&f.env, symbol_short!("transfer").into_val(&f.env)]
    );
    let data: Transfer = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        Transfer {
            from: None,
            to: contributor,
            amount: 250 * RATE,
        }
    );
}

#[test]
fn test_transfer_emits_event() {
    let f = setup();
    let contributor = f.finalize_at_minimum();
    let friend = Address::generate(&f.env);

    f.gnt.transfer(&contributor, &friend, &42);

    let (topics, data) = last_event_from(&f.env, &f.gnt.address);
    assert_eq!(
        topics,
        vec![&f.env, symbol_short!("transfer").into_val(&f.env)]
    );
    let data: Transfer = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        Transfer {
            from: Some(contributor),
            to: friend,
            amount: 42,
        }
    );
}

#[test]
fn test_refund_emits_event() {
    let f = setup();
    f.open_window();
    let contributor = f.funded_account(10);
    f.gnt.contribute(&contributor, &10);
    f.close_window();

    f.gnt.refund(&contributor);

    let (topics, data) = last_event_from(&f.env, &f.gnt.address);
    assert_eq!(
        topics,
        vec![
            &f.env,
            symbol_short!("refund").into_val(&f.env),
            contributor.clone().into_val(&f.env),
        ]
    );
    let data: Refund = data.try_into_val(&f.env).unwrap();
    assert_eq!(
        data,
        Refund {
            contributor,
            value: 10,
            tokens: 10 * RATE,
        }
    );
}

#[test]
fn test_finalize_emits_summary() {
    let f = setup();
    f.finalize_at_minimum();

    let (topics, data) = last_event_from(&f.env, &f.gnt.address);
    assert_eq!(
        topics,
        vec![&f.env, symbol_short!("finalized").into_val(&f.env)]
    );
    let data: FundingFinalized = data.try_into_val(&f.env).unwrap();
    assert_eq!(data.creator_share + data.allocation_share, 32_926_829);
    assert_eq!(data.total_supply, f.gnt.total_supply());
    assert_eq!(data.raised, MIN);
}

#[test]
fn test_set_migration_master_emits_event() {
    let f = setup();
    let new_master = Address::generate(&f.env);

    f.gnt.set_migration_master(&f.creator, &new_master);

    let (topics, data) = last_event_from(&f.env, &f.gnt.address);
    assert_eq!(
        topics,
        vec![&f.env, symbol_short!("master").into_val(&f.env)]
    );
    let data: MigrationMasterSet = data.try_into_val(&f.env).unwrap();
    assert_eq!(data, MigrationMasterSet { master: new_master });
}
