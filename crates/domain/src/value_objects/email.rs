use crate::errors::DomainError;
use serde::Serialize;
use std::fmt;

/// Normalized (trimmed, lower-cased) email address.
///
/// The only way to obtain one is [`Email::create`], so holding an `Email`
/// means the shape check has already passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn create(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(DomainError::validation("Email cannot be empty"));
        }

        if !Self::is_valid_format(trimmed) {
            return Err(DomainError::validation("Invalid email format"));
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn equals(&self, other: &Email) -> bool {
        self == other
    }

    // local@domain.tld: a single '@', no whitespace, and a '.' in the domain
    // with at least one character on each side of it.
    fn is_valid_format(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || domain.contains('@') {
            return false;
        }

        domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
