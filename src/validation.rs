//! Validation Support
//!
//! Per-entity error collection. Validation never raises; it attaches messages
//! to the entity being validated so every problem can be reported in one pass.

use std::collections::BTreeMap;
use std::fmt;
use serde::Serialize;

/// Messages collected for one entity, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorBag {
    errors: BTreeMap<String, Vec<String>>,
}

impl ErrorBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field, keeping earlier messages
    pub fn add<F: Into<String>, M: Into<String>>(&mut self, field: F, message: M) {
        self.errors.entry(field.into()).or_default().push(message.into());
    }

    /// True when no field holds a message
    pub fn is_empty(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Messages recorded for a field, in the order they were added
    pub fn on(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first_on(&self, field: &str) -> Option<&str> {
        self.on(field).first().map(String::as_str)
    }

    /// Every message, grouped by field name
    pub fn all(&self) -> Vec<&str> {
        self.errors.values().flatten().map(String::as_str).collect()
    }

    /// Field and message pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| (field.as_str(), m.as_str())))
    }
}

impl fmt::Display for ErrorBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.all().join(", "))
    }
}

/// Information available to a validation pass
///
/// Carries the name of the enclosing role when an entity is validated as
/// part of one.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    role_name: Option<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for entities validated inside a role
    pub fn for_role<S: Into<String>>(role_name: S) -> Self {
        Self { role_name: Some(role_name.into()) }
    }

    pub fn role_name(&self) -> Option<&str> {
        self.role_name.as_deref()
    }
}

/// An entity that collects its own validation errors
pub trait Validatable {
    /// Run validation, attaching any problems to this entity
    fn validate(&mut self, context: &ValidationContext);

    fn errors(&self) -> &ErrorBag;

    fn add_error(&mut self, field: &str, message: &str);
}
