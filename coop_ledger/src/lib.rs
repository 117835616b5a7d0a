//! # Cooperative Buying Ledger Core
//!
//! Authoritative, access-controlled records for a cooperative buying
//! program: a registry of verified members and a ledger of collective
//! purchase orders with per-member contributions. The single façade type
//! [`CoopLedger`] exposes every entry point:
//!
//! | Phase        | Entry Point(s)                                      |
//! |--------------|-----------------------------------------------------|
//! | Authority    | [`CoopLedger::transfer_admin`], [`CoopLedger::current_admin`] |
//! | Membership   | [`CoopLedger::register_member`], [`CoopLedger::update_member_status`] |
//! | Purchasing   | [`CoopLedger::create_purchase_order`], [`CoopLedger::update_order_status`] |
//! | Contributing | [`CoopLedger::contribute_to_order`]                 |
//! | Queries      | `get_member`, `is_active_member`, `get_purchase_order`, `get_contribution` |
//!
//! ## Architecture
//!
//! Authorization is fully delegated to [`access`]. Member records are
//! owned by [`membership`], orders and contributions by [`purchasing`];
//! the two registries share nothing but the `Arc<AccessControl>`. This
//! file contains **only** the façade wiring — no business logic lives
//! here directly.
//!
//! Every mutating call checks authorization (where applicable) and then
//! entity-existence/state preconditions, in that order, before touching
//! state. A rejected call leaves every collection unchanged. Reads never
//! mutate and never fail on authorization.
//!
//! The core is passive: the caller supplies its own identity (a
//! [`Principal`]) and the current ledger height (`now`) on every call —
//! the core never samples wall-clock time and never verifies signatures.
//! All mutating operations on a collection are linearizable; see the
//! module docs of [`purchasing`] for the one cross-record guarantee.

use std::sync::Arc;

pub mod access;
pub mod config;
pub mod errors;
pub mod membership;
pub mod purchasing;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_concurrency;

use access::AccessControl;
use config::Config;
use membership::MembershipRegistry;
use purchasing::PurchaseLedger;

pub use errors::{Error, Result};
pub use types::{
    CallResult, Contribution, Member, MemberId, MemberStatus, OrderId, OrderStatus, Principal,
    PurchaseOrder,
};

/// The assembled ledger core: one authority, two registries.
#[derive(Debug)]
pub struct CoopLedger {
    access: Arc<AccessControl>,
    membership: MembershipRegistry,
    purchasing: PurchaseLedger,
}

impl CoopLedger {
    /// Assemble the core with `initial_admin` as the first authority.
    pub fn new(initial_admin: Principal) -> Self {
        let access = Arc::new(AccessControl::new(initial_admin));
        CoopLedger {
            membership: MembershipRegistry::new(Arc::clone(&access)),
            purchasing: PurchaseLedger::new(Arc::clone(&access)),
            access,
        }
    }

    /// Assemble the core from environment configuration.
    pub fn from_config(config: &Config) -> Self {
        CoopLedger::new(config.admin.clone())
    }

    // ─────────────────────────────────────────────────────────
    // Authority
    // ─────────────────────────────────────────────────────────

    /// The current admin identity.
    pub fn current_admin(&self) -> Principal {
        self.access.current_admin()
    }

    /// Hand the admin authority to `new_admin`.
    ///
    /// `caller` must be the current admin and loses authorization
    /// immediately; there is no approval step and no way back except a
    /// transfer initiated by the new admin.
    pub fn transfer_admin(&self, caller: &Principal, new_admin: Principal) -> Result<()> {
        self.access.transfer_admin(caller, new_admin)
    }

    // ─────────────────────────────────────────────────────────
    // Membership
    // ─────────────────────────────────────────────────────────

    /// Register a new member. Admin-only.
    pub fn register_member(
        &self,
        caller: &Principal,
        member_id: MemberId,
        name: String,
        location: String,
        now: u64,
    ) -> Result<()> {
        self.membership
            .register_member(caller, member_id, name, location, now)
    }

    /// Set a member's status to `new_status` (0 = Inactive, 1 = Active).
    /// Admin-only.
    pub fn update_member_status(
        &self,
        caller: &Principal,
        member_id: &MemberId,
        new_status: u32,
        now: u64,
    ) -> Result<()> {
        self.membership
            .update_member_status(caller, member_id, new_status, now)
    }

    /// Look up a member by id.
    pub fn get_member(&self, member_id: &MemberId) -> Option<Member> {
        self.membership.get_member(member_id)
    }

    /// `true` iff the member exists and is Active.
    pub fn is_active_member(&self, member_id: &MemberId) -> bool {
        self.membership.is_active_member(member_id)
    }

    // ─────────────────────────────────────────────────────────
    // Purchasing
    // ─────────────────────────────────────────────────────────

    /// Create a new collective purchase order. Admin-only.
    pub fn create_purchase_order(
        &self,
        caller: &Principal,
        order_id: OrderId,
        item_name: String,
        quantity: u64,
        total_cost: u64,
        now: u64,
    ) -> Result<()> {
        self.purchasing
            .create_purchase_order(caller, order_id, item_name, quantity, total_cost, now)
    }

    /// Set an order's status to `new_status` (0 = Pending, 1 = Approved,
    /// 2 = Fulfilled, 3 = Cancelled). Admin-only.
    pub fn update_order_status(
        &self,
        caller: &Principal,
        order_id: &OrderId,
        new_status: u32,
    ) -> Result<()> {
        self.purchasing
            .update_order_status(caller, order_id, new_status)
    }

    /// Record or overwrite a member's pledge toward a Pending order.
    /// Open to any caller.
    pub fn contribute_to_order(
        &self,
        caller: &Principal,
        order_id: &OrderId,
        member_id: &MemberId,
        amount: u64,
        quantity_share: u64,
        now: u64,
    ) -> Result<()> {
        self.purchasing
            .contribute_to_order(caller, order_id, member_id, amount, quantity_share, now)
    }

    /// Look up an order by id.
    pub fn get_purchase_order(&self, order_id: &OrderId) -> Option<PurchaseOrder> {
        self.purchasing.get_purchase_order(order_id)
    }

    /// Look up a member's pledge toward an order.
    pub fn get_contribution(
        &self,
        order_id: &OrderId,
        member_id: &MemberId,
    ) -> Option<Contribution> {
        self.purchasing.get_contribution(order_id, member_id)
    }

    // ─────────────────────────────────────────────────────────
    // Component access, for hosts that wire pieces individually
    // ─────────────────────────────────────────────────────────

    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    pub fn membership(&self) -> &MembershipRegistry {
        &self.membership
    }

    pub fn purchasing(&self) -> &PurchaseLedger {
        &self.purchasing
    }
}
