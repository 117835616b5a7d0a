//! # Access control
//!
//! Single source of truth for "who may perform privileged writes". Both
//! registries hold an `Arc<AccessControl>` and consult it before touching
//! their own state; nothing else crosses component boundaries.
//!
//! The admin identity is one lock-protected field on one instance — never
//! an ambient global. There is no role hierarchy and no two-step handoff:
//! `transfer_admin` replaces the authority immediately and irrevocably,
//! revoking the caller's own access in the same step.

use std::sync::RwLock;

use tracing::info;

use crate::errors::{Error, Result};
use crate::storage::{read_book, write_book};
use crate::types::Principal;

#[derive(Debug)]
pub struct AccessControl {
    admin: RwLock<Principal>,
}

impl AccessControl {
    pub fn new(initial_admin: Principal) -> Self {
        AccessControl {
            admin: RwLock::new(initial_admin),
        }
    }

    /// The current admin identity. Side-effect-free.
    pub fn current_admin(&self) -> Principal {
        read_book(&self.admin).clone()
    }

    /// Ok iff `caller` is the current admin; the only failure is
    /// [`Error::NotAuthorized`], a terminal rejection of the call.
    pub fn authorize(&self, caller: &Principal) -> Result<()> {
        if *read_book(&self.admin) == *caller {
            Ok(())
        } else {
            Err(Error::NotAuthorized)
        }
    }

    /// Replace the admin identity. Takes effect immediately: the caller
    /// loses authorization in the same atomic step.
    pub fn transfer_admin(&self, caller: &Principal, new_admin: Principal) -> Result<()> {
        let mut admin = write_book(&self.admin);
        if *admin != *caller {
            return Err(Error::NotAuthorized);
        }
        *admin = new_admin;
        info!(new_admin = %*admin, "admin authority transferred");
        Ok(())
    }
}
