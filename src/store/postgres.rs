use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    accounts::{NewSignupAccount, SignupAccount},
    inquiries::{ContactInquiry, NewContactInquiry},
};

use super::{RecordStore, StoreError};

const NOT_NULL_VIOLATION: &str = "23502";
const CHECK_VIOLATION: &str = "23514";

/// Record store backed by the Postgres pool provisioned at startup
/// Failures are returned, the handlers log them
#[derive(Clone)]
pub struct PgRecordStore {
    db_pool: PgPool,
}

impl PgRecordStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(database_error) => {
                match database_error.code().as_deref() {
                    Some(NOT_NULL_VIOLATION) | Some(CHECK_VIOLATION) => {
                        StoreError::Rejected(database_error.message().to_owned())
                    }
                    _ => StoreError::Query(error.to_string()),
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Connection(error.to_string()),
            _ => StoreError::Query(error.to_string()),
        }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn create_inquiry(
        &self,
        inquiry: NewContactInquiry,
    ) -> Result<ContactInquiry, StoreError> {
        let inquiry: ContactInquiry = sqlx::query_as(
            "INSERT INTO contact_inquiries (
                name,
                phone,
                email,
                address,
                description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                id,
                name,
                phone,
                email,
                address,
                description,
                created_at",
        )
        .bind(&inquiry.name)
        .bind(&inquiry.phone)
        .bind(&inquiry.email)
        .bind(&inquiry.address)
        .bind(&inquiry.description)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(inquiry)
    }

    async fn create_account(
        &self,
        account: NewSignupAccount,
    ) -> Result<SignupAccount, StoreError> {
        let account = account.check()?;

        let account: SignupAccount = sqlx::query_as(
            "INSERT INTO signup_accounts (
                name,
                email,
                password_hash)
            VALUES ($1, $2, $3)
            RETURNING
                id,
                name,
                email,
                password_hash,
                created_at",
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(account)
    }

    async fn find_account_by_name(
        &self,
        name: &str,
    ) -> Result<Option<SignupAccount>, StoreError> {
        // Names are not unique, the first inserted account wins
        let account: Option<SignupAccount> = sqlx::query_as(
            "SELECT
                    id,
                    name,
                    email,
                    password_hash,
                    created_at
                FROM
                    signup_accounts
                WHERE
                    name = $1
                ORDER BY
                    seq ASC
                LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(account)
    }
}
