use crate::errors::DomainError;
use crate::value_objects::{Credit, Email};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Customer aggregate root.
///
/// Only [`Customer::create`] and [`Customer::reconstitute`] produce instances;
/// every mutator refreshes `updated_at`. The aggregate knows nothing about
/// persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: String,
    first_name: String,
    last_name: String,
    email: Email,
    available_credit: Credit,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Customer {
    /// New customer with zero credit. The id is supplied by the caller.
    pub fn create(
        id: impl Into<String>,
        first_name: &str,
        last_name: &str,
        email: Email,
    ) -> Result<Self, DomainError> {
        let first_name = validated_name(first_name, "First name cannot be empty")?;
        let last_name = validated_name(last_name, "Last name cannot be empty")?;
        let now = Utc::now();

        Ok(Self {
            id: id.into(),
            first_name,
            last_name,
            email,
            available_credit: Credit::zero(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate from storage. Fields are taken verbatim.
    pub fn reconstitute(
        id: String,
        first_name: String,
        last_name: String,
        email: Email,
        available_credit: Credit,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            available_credit,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn available_credit(&self) -> Credit {
        self.available_credit
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn update_first_name(&mut self, first_name: &str) -> Result<(), DomainError> {
        self.first_name = validated_name(first_name, "First name cannot be empty")?;
        self.touch();
        Ok(())
    }

    pub fn update_last_name(&mut self, last_name: &str) -> Result<(), DomainError> {
        self.last_name = validated_name(last_name, "Last name cannot be empty")?;
        self.touch();
        Ok(())
    }

    /// Uniqueness against other customers is checked by the caller.
    pub fn update_email(&mut self, email: Email) {
        self.email = email;
        self.touch();
    }

    pub fn add_credit(&mut self, amount: Decimal) -> Result<(), DomainError> {
        self.available_credit = self.available_credit.add(amount)?;
        self.touch();
        Ok(())
    }

    pub fn subtract_credit(&mut self, amount: Decimal) -> Result<(), DomainError> {
        self.available_credit = self.available_credit.subtract(amount)?;
        self.touch();
        Ok(())
    }

    // Never moves backwards, even if the wall clock does.
    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

fn validated_name(raw: &str, message: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(message));
    }
    Ok(trimmed.to_string())
}
