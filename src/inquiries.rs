use sqlx::{postgres::PgRow, types::Uuid, FromRow, Row};
use time::OffsetDateTime;

/// Contact inquiry as submitted from the contact form
/// Every field is optional, nothing is validated before storage
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewContactInquiry {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

impl NewContactInquiry {
    /// Attach the identity given by the store
    pub fn into_record(self, id: Uuid, created_at: OffsetDateTime) -> ContactInquiry {
        ContactInquiry {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
            description: self.description,
            created_at,
        }
    }
}

/// ContactInquiry struct
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactInquiry {
    pub id: Uuid,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
}

/// To get ContactInquiry from database
impl FromRow<'_, PgRow> for ContactInquiry {
    fn from_row(row: &PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            address: row.try_get("address")?,
            description: row.try_get("description")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
