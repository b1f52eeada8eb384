//! Caller-supplied role context
//!
//! A role context maps email addresses to known roles so the analyzer can
//! skip model-based inference for them. The mapping is validated once at
//! construction and is immutable for the duration of a run.

use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while validating a role context.
///
/// These are configuration errors: they invalidate the whole run and are
/// raised before any email is processed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RoleContextError {
    /// Top level of the context document is not a JSON object
    #[error("role context must be a JSON object mapping emails to roles")]
    NotAnObject,

    /// One or more entries map an email to a non-string value
    #[error("invalid role entries for emails: {0}")]
    NonStringRoles(String),
}

/// Immutable mapping from email address to a known role string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleContext {
    roles: HashMap<String, String>,
}

impl RoleContext {
    /// Build a context from a parsed JSON value.
    ///
    /// The top level must be an object and every value must be a string;
    /// all offending emails are reported in one error.
    pub fn from_value(value: Value) -> Result<Self, RoleContextError> {
        let map = match value {
            Value::Object(map) => map,
            _ => return Err(RoleContextError::NotAnObject),
        };

        let mut roles = HashMap::with_capacity(map.len());
        let mut invalid = Vec::new();
        for (email, role) in map {
            match role {
                Value::String(role) => {
                    roles.insert(email, role);
                }
                _ => invalid.push(email),
            }
        }

        if !invalid.is_empty() {
            return Err(RoleContextError::NonStringRoles(invalid.join(", ")));
        }

        Ok(Self { roles })
    }

    /// Look up the role for an email, if one was supplied.
    pub fn role_for(&self, email: &str) -> Option<&str> {
        self.roles.get(email).map(String::as_str)
    }

    /// Number of emails in the context.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the context holds no entries.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl From<HashMap<String, String>> for RoleContext {
    fn from(roles: HashMap<String, String>) -> Self {
        Self { roles }
    }
}
