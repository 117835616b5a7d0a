//! Numeric-coded error contract shared by every operation.
//!
//! The codes are part of the external interface and must match the host
//! application exactly:
//!
//! | Code | Variant           | Raised by                                  |
//! |------|-------------------|--------------------------------------------|
//! | 100  | `AlreadyExists`   | `register_member`, `create_purchase_order` |
//! | 101  | `InvalidStatus`   | `update_member_status`, `update_order_status` |
//! | 102  | `OrderNotPending` | `contribute_to_order`                      |
//! | 403  | `NotAuthorized`   | every admin-gated write                    |
//! | 404  | `NotFound`        | status updates and contributions against an unknown entity |
//!
//! Every error is a terminal rejection of the single call that produced it:
//! the core never retries, never logs the failure, and never applies a
//! partial mutation (all checks run before any write).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Copy, Clone, Debug, Error, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    #[error("entity with this id already exists")]
    AlreadyExists = 100,
    #[error("supplied status value outside the permitted set")]
    InvalidStatus = 101,
    #[error("order is not in Pending state")]
    OrderNotPending = 102,
    #[error("caller is not the current admin")]
    NotAuthorized = 403,
    #[error("referenced entity does not exist")]
    NotFound = 404,
}

impl Error {
    /// The numeric code carried on the wire.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Inverse of [`Error::code`]. `None` for values outside the table.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            100 => Some(Error::AlreadyExists),
            101 => Some(Error::InvalidStatus),
            102 => Some(Error::OrderNotPending),
            403 => Some(Error::NotAuthorized),
            404 => Some(Error::NotFound),
            _ => None,
        }
    }
}

// Errors cross the wire as their bare numeric code.
impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

impl<'de> Deserialize<'de> for Error {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = u32::deserialize(deserializer)?;
        Error::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown error code: {code}")))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
