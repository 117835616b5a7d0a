//! # Types
//!
//! Shared data structures used across all modules of the cooperative ledger.
//!
//! ## Design decisions
//!
//! ### Typed identifiers
//!
//! Caller identities and entity keys are all string-like on the wire, so
//! they are wrapped in newtypes ([`Principal`], [`MemberId`], [`OrderId`])
//! to keep them from being swapped at a call site. All three serialize
//! transparently as plain strings.
//!
//! ### Status as numeric codes
//!
//! [`MemberStatus`] and [`OrderStatus`] cross the wire as their numeric
//! codes (`0`/`1` and `0..=3`). The update operations accept the raw code
//! and reject out-of-range values with [`Error::InvalidStatus`] before any
//! other lookup runs.
//!
//! ### No terminal order state
//!
//! `OrderStatus` deliberately forms a complete digraph: every status is
//! reachable from every other via `update_order_status`, including backward
//! moves such as Fulfilled back to Pending. Contribution admission is gated
//! on Pending alone.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

// ── Identifiers ──────────────────────────────────────────────────────

/// Opaque caller identity, as supplied by the external authentication
/// collaborator. The admin authority is a `Principal` like any other.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(pub String);

/// Unique external key of a [`Member`].
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

/// Unique external key of a [`PurchaseOrder`].
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

macro_rules! string_id {
    ($name:ident) => {
        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(Principal);
string_id!(MemberId);
string_id!(OrderId);

// ── Status enums ─────────────────────────────────────────────────────

/// Membership status. Members are never deleted, only toggled.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum MemberStatus {
    Inactive = 0,
    Active = 1,
}

impl MemberStatus {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(MemberStatus::Inactive),
            1 => Some(MemberStatus::Active),
            _ => None,
        }
    }
}

impl From<MemberStatus> for u32 {
    fn from(status: MemberStatus) -> u32 {
        status.code()
    }
}

impl TryFrom<u32> for MemberStatus {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self, Error> {
        MemberStatus::from_code(code).ok_or(Error::InvalidStatus)
    }
}

/// Lifecycle status of a purchase order.
///
/// Pending is the sole initial state; contributions are accepted only
/// while an order is Pending.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum OrderStatus {
    /// Accepting contributions.
    Pending = 0,
    /// Approved by the admin; closed to contributions.
    Approved = 1,
    /// Goods received and distributed.
    Fulfilled = 2,
    /// Abandoned by the admin.
    Cancelled = 3,
}

impl OrderStatus {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(OrderStatus::Pending),
            1 => Some(OrderStatus::Approved),
            2 => Some(OrderStatus::Fulfilled),
            3 => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl From<OrderStatus> for u32 {
    fn from(status: OrderStatus) -> u32 {
        status.code()
    }
}

impl TryFrom<u32> for OrderStatus {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self, Error> {
        OrderStatus::from_code(code).ok_or(Error::InvalidStatus)
    }
}

// ── Records ──────────────────────────────────────────────────────────

/// A verified program member.
///
/// Every field except `status` is written once at registration and never
/// mutated; there is no update path for `name` or `location`, and records
/// are never deleted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique external key, immutable.
    pub member_id: MemberId,
    /// Identity of the registering caller, immutable.
    pub principal: Principal,
    /// Free-text display name, immutable.
    pub name: String,
    /// Free-text location, immutable.
    pub location: String,
    /// Ledger height captured at registration, immutable.
    pub join_date: u64,
    /// Current membership status. New members start Active.
    pub status: MemberStatus,
}

/// A collective purchase order.
///
/// Descriptive and financial attributes are immutable after creation; only
/// `status` has a write path. Orders are never deleted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Unique external key, immutable.
    pub order_id: OrderId,
    /// What is being bought, immutable.
    pub item_name: String,
    /// Ordered quantity, immutable.
    pub quantity: u64,
    /// Total cost of the order, immutable.
    pub total_cost: u64,
    /// Current lifecycle status. New orders start Pending.
    pub status: OrderStatus,
    /// Ledger height captured at creation, immutable.
    pub creation_date: u64,
}

/// A member's pledge toward a purchase order.
///
/// Keyed by `(order_id, member_id)`: a member holds at most one record per
/// order, and a later pledge overwrites the earlier one rather than
/// accumulating. Writable only while the order is Pending; never purged.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// Pledged amount.
    pub amount: u64,
    /// Pledged share of the order quantity.
    pub quantity_share: u64,
    /// Ledger height at the time of the (re)write.
    pub contribution_date: u64,
}

// ── Wire result ──────────────────────────────────────────────────────

/// The tagged result form hosts ship over a transport:
/// `{ "type": "ok", "value": ... }` or `{ "type": "err", "value": <code> }`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CallResult<T> {
    Ok(T),
    Err(Error),
}

impl<T> From<Result<T, Error>> for CallResult<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => CallResult::Ok(value),
            Err(err) => CallResult::Err(err),
        }
    }
}

impl<T> From<CallResult<T>> for Result<T, Error> {
    fn from(result: CallResult<T>) -> Self {
        match result {
            CallResult::Ok(value) => Ok(value),
            CallResult::Err(err) => Err(err),
        }
    }
}
