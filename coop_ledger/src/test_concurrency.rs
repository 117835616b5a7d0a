//! Linearizability of the per-collection mutual-exclusion domains under
//! real threads.

use std::sync::Arc;
use std::thread;

use crate::{CoopLedger, Error, MemberId, OrderId, Principal};

fn admin() -> Principal {
    Principal::from("GADMIN")
}

#[test]
fn test_concurrent_registrations_of_distinct_members() {
    let ledger = Arc::new(CoopLedger::new(admin()));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                ledger.register_member(
                    &admin(),
                    MemberId(format!("M{i}")),
                    format!("Member {i}"),
                    "Kano".into(),
                    i,
                )
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    for i in 0..16u64 {
        let member = ledger.get_member(&MemberId(format!("M{i}"))).unwrap();
        assert_eq!(member.join_date, i);
    }
}

#[test]
fn test_racing_registrations_of_same_id_admit_exactly_one() {
    let ledger = Arc::new(CoopLedger::new(admin()));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                ledger.register_member(
                    &admin(),
                    "M1".into(),
                    format!("Racer {i}"),
                    "Kano".into(),
                    i,
                )
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results
        .iter()
        .filter(|r| r.is_err())
        .all(|r| *r == Err(Error::AlreadyExists)));

    // The surviving record belongs to the single winner.
    let member = ledger.get_member(&"M1".into()).unwrap();
    assert_eq!(member.name, format!("Racer {}", member.join_date));
}

#[test]
fn test_racing_contributions_leave_one_coherent_record() {
    let ledger = Arc::new(CoopLedger::new(admin()));
    ledger
        .create_purchase_order(&admin(), "O1".into(), "Fertilizer".into(), 1000, 5000, 0)
        .unwrap();

    let handles: Vec<_> = (1..=16u64)
        .map(|i| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                ledger.contribute_to_order(
                    &Principal(format!("G{i}")),
                    &"O1".into(),
                    &"M1".into(),
                    i * 100,
                    i,
                    i,
                )
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    // Last write wins, and the winning write is all-or-nothing: the
    // amount, share, and date of the surviving record come from the same
    // call.
    let pledge = ledger.get_contribution(&"O1".into(), &"M1".into()).unwrap();
    assert_eq!(pledge.amount, pledge.contribution_date * 100);
    assert_eq!(pledge.quantity_share, pledge.contribution_date);
}

#[test]
fn test_contributions_racing_a_status_change() {
    let ledger = Arc::new(CoopLedger::new(admin()));
    ledger
        .create_purchase_order(&admin(), "O1".into(), "Fertilizer".into(), 1000, 5000, 0)
        .unwrap();

    let contributors: Vec<_> = (0..8u64)
        .map(|i| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                ledger.contribute_to_order(
                    &Principal(format!("G{i}")),
                    &"O1".into(),
                    &MemberId(format!("M{i}")),
                    100,
                    10,
                    i,
                )
            })
        })
        .collect();

    let closer = {
        let ledger = Arc::clone(&ledger);
        thread::spawn(move || ledger.update_order_status(&admin(), &"O1".into(), 1))
    };

    let results: Vec<_> = contributors.into_iter().map(|h| h.join().unwrap()).collect();
    closer.join().unwrap().unwrap();

    // Each contribution either fully landed before the close (record
    // present) or was fully rejected with 102 (no record) — never a torn
    // middle state.
    for (i, result) in results.iter().enumerate() {
        let member_id = MemberId(format!("M{i}"));
        match result {
            Ok(()) => assert!(ledger.get_contribution(&"O1".into(), &member_id).is_some()),
            Err(err) => {
                assert_eq!(*err, Error::OrderNotPending);
                assert!(ledger.get_contribution(&"O1".into(), &member_id).is_none());
            }
        }
    }

    let order_id = OrderId::from("O1");
    assert_eq!(
        ledger.get_purchase_order(&order_id).unwrap().status.code(),
        1
    );
}

#[test]
fn test_admin_transfer_races_gated_writes() {
    let ledger = Arc::new(CoopLedger::new(admin()));
    let successor = Principal::from("GSUCCESSOR");

    let writers: Vec<_> = (0..8)
        .map(|i| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                ledger.register_member(
                    &admin(),
                    MemberId(format!("M{i}")),
                    "Racer".into(),
                    "Kano".into(),
                    0,
                )
            })
        })
        .collect();

    let transfer = {
        let ledger = Arc::clone(&ledger);
        let successor = successor.clone();
        thread::spawn(move || ledger.transfer_admin(&admin(), successor))
    };

    let results: Vec<_> = writers.into_iter().map(|h| h.join().unwrap()).collect();
    transfer.join().unwrap().unwrap();

    // Writes serialized either before the transfer (success, record
    // present) or after it (403, no record).
    for (i, result) in results.iter().enumerate() {
        let member_id = MemberId(format!("M{i}"));
        match result {
            Ok(()) => assert!(ledger.get_member(&member_id).is_some()),
            Err(err) => {
                assert_eq!(*err, Error::NotAuthorized);
                assert!(ledger.get_member(&member_id).is_none());
            }
        }
    }
    assert_eq!(ledger.current_admin(), successor);
}
