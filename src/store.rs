pub mod memory;
pub mod postgres;

use std::fmt;

use async_trait::async_trait;
use tracing::Level;

use crate::{
    accounts::{NewSignupAccount, SignupAccount},
    inquiries::{ContactInquiry, NewContactInquiry},
};

/// Error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    MissingField(&'static str),
    Rejected(String),
    Connection(String),
    Query(String),
}

impl StoreError {
    /// The write was refused because of the record content, not the backend
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::MissingField(_) | StoreError::Rejected(_))
    }

    /// Rejected records are the visitor's doing, backend failures are ours
    pub fn log_level(&self) -> Level {
        if self.is_validation() {
            Level::WARN
        } else {
            Level::ERROR
        }
    }

    /// Log the failure once, at the level it deserves
    pub fn log(&self, context: &str) {
        if self.log_level() == Level::WARN {
            tracing::warn!("{} rejected -> {}", context, self);
        } else {
            tracing::error!("{} failed -> {}", context, self);
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::MissingField(field) => write!(f, "missing required field `{}`", field),
            StoreError::Rejected(reason) => write!(f, "record rejected: {}", reason),
            StoreError::Connection(reason) => write!(f, "store connection failed: {}", reason),
            StoreError::Query(reason) => write!(f, "store query failed: {}", reason),
        }
    }
}

impl std::error::Error for StoreError {}

/// Record store
/// Creates records of each kind and looks accounts up by name
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_inquiry(&self, inquiry: NewContactInquiry)
        -> Result<ContactInquiry, StoreError>;

    async fn create_account(&self, account: NewSignupAccount)
        -> Result<SignupAccount, StoreError>;

    /// Earliest created account carrying this name, if any
    async fn find_account_by_name(&self, name: &str)
        -> Result<Option<SignupAccount>, StoreError>;
}

/// Required field check shared by every store
/// Absent and blank values are both rejected
pub fn required(value: Option<String>, field: &'static str) -> Result<String, StoreError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(StoreError::MissingField(field)),
    }
}
