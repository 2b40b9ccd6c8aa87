use crate::entities::Customer;
use crate::errors::DomainError;
use crate::value_objects::Email;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            other => Err(DomainError::validation(format!(
                "Invalid sort direction: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence port for the customer aggregate.
///
/// Implementations must be safe to share between concurrently running use
/// cases. Storage failures surface as `DomainError::PersistenceError`.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, DomainError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError>;
    async fn find_all_sorted_by_credit(
        &self,
        direction: SortDirection,
    ) -> Result<Vec<Customer>, DomainError>;
    /// Upsert keyed on id; returns the representation read back from storage.
    async fn save(&self, customer: &Customer) -> Result<Customer, DomainError>;
    async fn exists(&self, id: &str) -> Result<bool, DomainError>;
    /// Callers check `exists` first; deleting an unknown id is not guaranteed to be a no-op.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
