//! Role Membership
//!
//! A user's membership in a role. The owning role detects duplicate members
//! and reports them through [`RoleUser::add_duplicate_error`].

use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};
use crate::identifier::CaseInsensitiveString;
use crate::validation::{ErrorBag, Validatable, ValidationContext};

/// Field carrying the user name
pub const NAME: &str = "name";

/// One user listed in a role
///
/// Identity is the name alone, compared without case. Collected errors are
/// validation state and play no part in equality or hashing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleUser {
    name: Option<CaseInsensitiveString>,

    #[serde(skip)]
    errors: ErrorBag,
}

impl RoleUser {
    pub fn new<S: Into<CaseInsensitiveString>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            errors: ErrorBag::new(),
        }
    }

    /// A member whose name has not been set
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&CaseInsensitiveString> {
        self.name.as_ref()
    }

    /// Record that another member of `role_name` already has this name
    pub fn add_duplicate_error(&mut self, role_name: &str) {
        let message = format!(
            "User '{}' already exists in '{}'.",
            CaseInsensitiveString::str(self.name.as_ref()),
            role_name
        );
        self.errors.add(NAME, message);
    }
}

impl Validatable for RoleUser {
    /// Membership rules are enforced by the owning role; nothing to check here yet
    fn validate(&mut self, _context: &ValidationContext) {}

    fn errors(&self) -> &ErrorBag {
        &self.errors
    }

    fn add_error(&mut self, field: &str, message: &str) {
        self.errors.add(field, message);
    }
}

impl PartialEq for RoleUser {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for RoleUser {}

impl Hash for RoleUser {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
