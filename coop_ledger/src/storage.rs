//! # Storage
//!
//! In-memory collection books over the durable key-value substrate the
//! core assumes. Each book is a plain struct of maps; the owning component
//! wraps its book in a single `RwLock` so that every check-then-mutate
//! step runs under one guard.
//!
//! | Book           | Key                    | Value           |
//! |----------------|------------------------|-----------------|
//! | `MemberBook`   | `MemberId`             | `Member`        |
//! | `PurchaseBook` | `OrderId`              | `PurchaseOrder` |
//! | `PurchaseBook` | `(OrderId, MemberId)`  | `Contribution`  |
//!
//! Orders and contributions share one book (one lock) on purpose: the
//! Pending check and the contribution upsert must be a single atomic step.
//!
//! The access pattern is the whole contract with the substrate: point
//! lookup by unique or composite key, insert-if-absent, and
//! overwrite-in-place. Nothing here iterates, ranges, or deletes.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::types::{Contribution, Member, MemberId, OrderId, PurchaseOrder};

/// All member records, keyed by member id. Insert-only; status is the one
/// field overwritten in place.
#[derive(Debug, Default)]
pub struct MemberBook {
    members: HashMap<MemberId, Member>,
}

impl MemberBook {
    pub fn contains(&self, member_id: &MemberId) -> bool {
        self.members.contains_key(member_id)
    }

    pub fn get(&self, member_id: &MemberId) -> Option<&Member> {
        self.members.get(member_id)
    }

    pub fn get_mut(&mut self, member_id: &MemberId) -> Option<&mut Member> {
        self.members.get_mut(member_id)
    }

    /// Insert a new record. The caller has already ruled out a duplicate
    /// under the same write guard.
    pub fn insert(&mut self, member: Member) {
        self.members.insert(member.member_id.clone(), member);
    }
}

/// All purchase orders plus every contribution, keyed by order id and by
/// the `(order_id, member_id)` composite respectively.
///
/// Contributions live in one flat map keyed by the tuple rather than in
/// nested per-order maps, so an upsert is a single map write.
#[derive(Debug, Default)]
pub struct PurchaseBook {
    orders: HashMap<OrderId, PurchaseOrder>,
    contributions: HashMap<(OrderId, MemberId), Contribution>,
}

impl PurchaseBook {
    pub fn contains_order(&self, order_id: &OrderId) -> bool {
        self.orders.contains_key(order_id)
    }

    pub fn order(&self, order_id: &OrderId) -> Option<&PurchaseOrder> {
        self.orders.get(order_id)
    }

    pub fn order_mut(&mut self, order_id: &OrderId) -> Option<&mut PurchaseOrder> {
        self.orders.get_mut(order_id)
    }

    /// Insert a new order. Duplicate check happens in the caller, under
    /// the same write guard.
    pub fn insert_order(&mut self, order: PurchaseOrder) {
        self.orders.insert(order.order_id.clone(), order);
    }

    pub fn contribution(&self, order_id: &OrderId, member_id: &MemberId) -> Option<&Contribution> {
        self.contributions
            .get(&(order_id.clone(), member_id.clone()))
    }

    /// Last-write-wins upsert of a member's pledge toward an order.
    pub fn upsert_contribution(
        &mut self,
        order_id: OrderId,
        member_id: MemberId,
        contribution: Contribution,
    ) {
        self.contributions.insert((order_id, member_id), contribution);
    }
}

// ── Guard helpers ────────────────────────────────────────────────────

// Poisoning is recovered via `into_inner`: a panicked writer cannot leave
// a half-applied mutation, because every write is a single map insert or
// field assignment performed after all checks have passed.

pub fn read_book<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn write_book<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
