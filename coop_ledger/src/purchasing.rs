//! # Purchase ledger
//!
//! Owns every [`PurchaseOrder`] and [`Contribution`] record. Order
//! lifecycle writes are admin-gated; contribution writes deliberately are
//! not — any caller may pledge, gated only on the order being Pending.
//!
//! Orders and contributions live behind one lock so that the Pending
//! check and the contribution upsert form a single atomic step: a
//! contribution must not land on an order that left Pending mid-call.
//!
//! The order status graph is a complete digraph: `update_order_status`
//! moves an order to any of the four states from any other, backward
//! moves included. No state is terminal. This permissive graph is
//! intentional (administrative override) and is preserved as such.

use std::sync::{Arc, RwLock};

use tracing::info;

use crate::access::AccessControl;
use crate::errors::{Error, Result};
use crate::storage::{read_book, write_book, PurchaseBook};
use crate::types::{Contribution, MemberId, OrderId, OrderStatus, Principal, PurchaseOrder};

#[derive(Debug)]
pub struct PurchaseLedger {
    access: Arc<AccessControl>,
    book: RwLock<PurchaseBook>,
}

impl PurchaseLedger {
    pub fn new(access: Arc<AccessControl>) -> Self {
        PurchaseLedger {
            access,
            book: RwLock::new(PurchaseBook::default()),
        }
    }

    /// Create a new order with status Pending and `creation_date = now`.
    ///
    /// Admin-only. Fails with 100 if `order_id` is already taken.
    pub fn create_purchase_order(
        &self,
        caller: &Principal,
        order_id: OrderId,
        item_name: String,
        quantity: u64,
        total_cost: u64,
        now: u64,
    ) -> Result<()> {
        self.access.authorize(caller)?;

        let mut book = write_book(&self.book);
        if book.contains_order(&order_id) {
            return Err(Error::AlreadyExists);
        }

        let order = PurchaseOrder {
            order_id: order_id.clone(),
            item_name,
            quantity,
            total_cost,
            status: OrderStatus::Pending,
            creation_date: now,
        };
        book.insert_order(order);
        info!(order_id = %order_id, "purchase order created");
        Ok(())
    }

    /// Overwrite an order's status unconditionally. No monotonicity is
    /// enforced: any status may follow any other.
    ///
    /// Admin-only. The status code is range-checked (101) before the
    /// existence check (404).
    pub fn update_order_status(
        &self,
        caller: &Principal,
        order_id: &OrderId,
        new_status: u32,
    ) -> Result<()> {
        self.access.authorize(caller)?;
        let status = OrderStatus::try_from(new_status)?;

        let mut book = write_book(&self.book);
        let order = book.order_mut(order_id).ok_or(Error::NotFound)?;
        order.status = status;
        info!(order_id = %order_id, status = status.code(), "order status updated");
        Ok(())
    }

    /// Record (or overwrite) `member_id`'s pledge toward `order_id`.
    ///
    /// NOT admin-gated: any caller may contribute, member-registered or
    /// not. `_caller` is accepted for call-shape parity but not recorded.
    /// The order must exist (404) and be Pending (102). A later pledge
    /// replaces the earlier one — no accumulation, no bounds, and no
    /// cross-check against the order's total cost or quantity.
    pub fn contribute_to_order(
        &self,
        _caller: &Principal,
        order_id: &OrderId,
        member_id: &MemberId,
        amount: u64,
        quantity_share: u64,
        now: u64,
    ) -> Result<()> {
        let mut book = write_book(&self.book);
        let order = book.order(order_id).ok_or(Error::NotFound)?;
        if order.status != OrderStatus::Pending {
            return Err(Error::OrderNotPending);
        }

        let contribution = Contribution {
            amount,
            quantity_share,
            contribution_date: now,
        };
        book.upsert_contribution(order_id.clone(), member_id.clone(), contribution);
        info!(order_id = %order_id, member_id = %member_id, amount, "contribution recorded");
        Ok(())
    }

    /// Pure lookup; no authorization required.
    pub fn get_purchase_order(&self, order_id: &OrderId) -> Option<PurchaseOrder> {
        read_book(&self.book).order(order_id).cloned()
    }

    /// Pure lookup by the `(order_id, member_id)` composite key.
    pub fn get_contribution(
        &self,
        order_id: &OrderId,
        member_id: &MemberId,
    ) -> Option<Contribution> {
        read_book(&self.book).contribution(order_id, member_id).cloned()
    }
}
