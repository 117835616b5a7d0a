#![allow(dead_code)]

//! Test-only assertion helpers for the data-model invariants.

use crate::errors::Error;
use crate::types::{Member, PurchaseOrder};

/// INV-1: Member immutability — every field except `status` is written
/// once at registration and never changes.
pub fn assert_member_immutable_fields(original: &Member, current: &Member) {
    assert_eq!(
        original.member_id, current.member_id,
        "INV-1 violated: member_id changed"
    );
    assert_eq!(
        original.principal, current.principal,
        "INV-1 violated: member principal changed"
    );
    assert_eq!(original.name, current.name, "INV-1 violated: member name changed");
    assert_eq!(
        original.location, current.location,
        "INV-1 violated: member location changed"
    );
    assert_eq!(
        original.join_date, current.join_date,
        "INV-1 violated: member join_date changed"
    );
}

/// INV-2: Order immutability — every field except `status` is written
/// once at creation and never changes.
pub fn assert_order_immutable_fields(original: &PurchaseOrder, current: &PurchaseOrder) {
    assert_eq!(
        original.order_id, current.order_id,
        "INV-2 violated: order_id changed"
    );
    assert_eq!(
        original.item_name, current.item_name,
        "INV-2 violated: order item_name changed"
    );
    assert_eq!(
        original.quantity, current.quantity,
        "INV-2 violated: order quantity changed"
    );
    assert_eq!(
        original.total_cost, current.total_cost,
        "INV-2 violated: order total_cost changed"
    );
    assert_eq!(
        original.creation_date, current.creation_date,
        "INV-2 violated: order creation_date changed"
    );
}

/// INV-3: A rejected call is terminal and carries exactly the expected
/// numeric code.
pub fn assert_rejected_with<T: std::fmt::Debug>(result: Result<T, Error>, code: u32) {
    match result {
        Err(err) => assert_eq!(
            err.code(),
            code,
            "INV-3 violated: expected code {code}, got {} ({err})",
            err.code()
        ),
        Ok(value) => panic!("INV-3 violated: expected code {code}, call succeeded with {value:?}"),
    }
}
