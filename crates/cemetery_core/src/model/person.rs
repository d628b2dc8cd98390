//! People known to the catalog (administrators and visitors).
//!
//! Roles are tags only; no behavior differs between them.

use crate::model::space::InputValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex")
});

pub type PersonId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonRole {
    Administrator,
    Visitor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub role: PersonRole,
}

/// Registration input for a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub role: PersonRole,
}

impl NewPerson {
    pub fn administrator(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: PersonRole::Administrator,
        }
    }

    pub fn visitor(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: PersonRole::Visitor,
        }
    }

    /// Checks name presence and email shape. Callers run this before registering.
    pub fn validate(&self) -> Result<(), InputValidationError> {
        if self.name.trim().is_empty() {
            return Err(InputValidationError::EmptyField("name"));
        }
        let email = self.email.trim();
        if !EMAIL_RE.is_match(email) {
            return Err(InputValidationError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

impl Person {
    pub fn from_input(id: PersonId, input: NewPerson) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            role: input.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NewPerson;

    #[test]
    fn validate_accepts_plain_address() {
        assert!(NewPerson::visitor("Ana", "ana@example.org").validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_domain() {
        assert!(NewPerson::administrator("Luis", "luis@").validate().is_err());
        assert!(NewPerson::administrator("Luis", "luis example.org")
            .validate()
            .is_err());
    }
}
