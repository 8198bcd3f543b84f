use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use sqlx::types::Uuid;
use time::OffsetDateTime;

use crate::{
    accounts::{NewSignupAccount, SignupAccount},
    inquiries::{ContactInquiry, NewContactInquiry},
};

use super::{RecordStore, StoreError};

#[derive(Default)]
struct Collections {
    last_id: u128,
    inquiries: Vec<ContactInquiry>,
    accounts: Vec<SignupAccount>,
}

impl Collections {
    fn next_id(&mut self) -> Uuid {
        self.last_id += 1;
        Uuid::from_u128(self.last_id)
    }
}

/// In-process record store
/// Records are kept in insertion order and lost when the process exits
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, StoreError> {
        self.collections
            .lock()
            .map_err(|error| StoreError::Connection(error.to_string()))
    }

    /// Snapshot of every stored inquiry
    pub fn inquiries(&self) -> Vec<ContactInquiry> {
        self.lock()
            .map(|collections| collections.inquiries.clone())
            .unwrap_or_default()
    }

    /// Snapshot of every stored account
    pub fn accounts(&self) -> Vec<SignupAccount> {
        self.lock()
            .map(|collections| collections.accounts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create_inquiry(
        &self,
        inquiry: NewContactInquiry,
    ) -> Result<ContactInquiry, StoreError> {
        let mut collections = self.lock()?;
        let id = collections.next_id();
        let inquiry = inquiry.into_record(id, OffsetDateTime::now_utc());
        collections.inquiries.push(inquiry.clone());

        Ok(inquiry)
    }

    async fn create_account(
        &self,
        account: NewSignupAccount,
    ) -> Result<SignupAccount, StoreError> {
        let account = account.check()?;

        let mut collections = self.lock()?;
        let id = collections.next_id();
        let account = account.into_record(id, OffsetDateTime::now_utc());
        collections.accounts.push(account.clone());

        Ok(account)
    }

    async fn find_account_by_name(
        &self,
        name: &str,
    ) -> Result<Option<SignupAccount>, StoreError> {
        Ok(self
            .lock()?
            .accounts
            .iter()
            .find(|account| account.name == name)
            .cloned())
    }
}
