use sqlx::{postgres::PgRow, types::Uuid, FromRow, Row};
use time::OffsetDateTime;

use crate::store::{required, StoreError};

/// Signup account as it arrives at the store
/// Name, email and password hash are required, the store enforces it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewSignupAccount {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// Account fields once the required ones are known to be present
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckedSignupAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewSignupAccount {
    /// Check required fields
    pub fn check(self) -> Result<CheckedSignupAccount, StoreError> {
        Ok(CheckedSignupAccount {
            name: required(self.name, "name")?,
            email: required(self.email, "email")?,
            password_hash: required(self.password_hash, "password")?,
        })
    }
}

impl CheckedSignupAccount {
    pub fn into_record(self, id: Uuid, created_at: OffsetDateTime) -> SignupAccount {
        SignupAccount {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            created_at,
        }
    }
}

/// SignupAccount struct
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupAccount {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: OffsetDateTime,
}

/// To get SignupAccount from database
impl FromRow<'_, PgRow> for SignupAccount {
    fn from_row(row: &PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
