//! # Membership registry
//!
//! Owns every [`Member`] record. Writes are admin-gated through
//! [`AccessControl`]; reads never authorize and never mutate.
//!
//! Check order is binding on every write: authorization strictly before
//! the duplicate or not-found check, so a non-admin caller can never
//! probe whether a member id exists.

use std::sync::{Arc, RwLock};

use tracing::info;

use crate::access::AccessControl;
use crate::errors::{Error, Result};
use crate::storage::{read_book, write_book, MemberBook};
use crate::types::{Member, MemberId, MemberStatus, Principal};

#[derive(Debug)]
pub struct MembershipRegistry {
    access: Arc<AccessControl>,
    book: RwLock<MemberBook>,
}

impl MembershipRegistry {
    pub fn new(access: Arc<AccessControl>) -> Self {
        MembershipRegistry {
            access,
            book: RwLock::new(MemberBook::default()),
        }
    }

    /// Register a new member with status Active and `join_date = now`.
    ///
    /// Admin-only. Fails with 100 if `member_id` is already taken; the
    /// existing record is left untouched.
    pub fn register_member(
        &self,
        caller: &Principal,
        member_id: MemberId,
        name: String,
        location: String,
        now: u64,
    ) -> Result<()> {
        self.access.authorize(caller)?;

        let mut book = write_book(&self.book);
        if book.contains(&member_id) {
            return Err(Error::AlreadyExists);
        }

        let member = Member {
            member_id: member_id.clone(),
            principal: caller.clone(),
            name,
            location,
            join_date: now,
            status: MemberStatus::Active,
        };
        book.insert(member);
        info!(member_id = %member_id, "member registered");
        Ok(())
    }

    /// Overwrite a member's status in place; every other field is
    /// untouched. `_now` is accepted for call-shape parity but not
    /// recorded — members carry no last-updated field.
    ///
    /// Admin-only. The status code is range-checked (101) before the
    /// existence check (404).
    pub fn update_member_status(
        &self,
        caller: &Principal,
        member_id: &MemberId,
        new_status: u32,
        _now: u64,
    ) -> Result<()> {
        self.access.authorize(caller)?;
        let status = MemberStatus::try_from(new_status)?;

        let mut book = write_book(&self.book);
        let member = book.get_mut(member_id).ok_or(Error::NotFound)?;
        member.status = status;
        info!(member_id = %member_id, status = status.code(), "member status updated");
        Ok(())
    }

    /// Pure lookup; no authorization required.
    pub fn get_member(&self, member_id: &MemberId) -> Option<Member> {
        read_book(&self.book).get(member_id).cloned()
    }

    /// `false` both for an unknown member and for an Inactive one; use
    /// [`MembershipRegistry::get_member`] to tell the two apart.
    pub fn is_active_member(&self, member_id: &MemberId) -> bool {
        read_book(&self.book)
            .get(member_id)
            .map(|m| m.status == MemberStatus::Active)
            .unwrap_or(false)
    }
}
