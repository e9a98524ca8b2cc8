//! Authorization Capabilities
//!
//! What an authorization plugin declares it can do.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::plugin::error::InvalidCapabilityError;

/// How users authenticate against the plugin
///
/// Decoding goes through [`FromStr`], so serialized tags obey the same rules
/// as [`Capabilities::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SupportedAuthType {
    /// Username and password checked by the plugin
    Password,

    /// Browser based flow driven by the plugin (OAuth, SAML, webhooks)
    Web,
}

impl SupportedAuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedAuthType::Password => "password",
            SupportedAuthType::Web => "web",
        }
    }
}

impl FromStr for SupportedAuthType {
    type Err = InvalidCapabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "password" => Ok(SupportedAuthType::Password),
            "web" | "webhook" => Ok(SupportedAuthType::Web),
            _ => Err(InvalidCapabilityError::new(s)),
        }
    }
}

impl TryFrom<String> for SupportedAuthType {
    type Error = InvalidCapabilityError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl fmt::Display for SupportedAuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability flags of an authorization plugin
///
/// Only built through [`Capabilities::new`] or [`Capabilities::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Capabilities {
    supported_auth_type: SupportedAuthType,
    can_search: bool,
}

impl Capabilities {
    pub fn new(supported_auth_type: SupportedAuthType, can_search: bool) -> Self {
        Self { supported_auth_type, can_search }
    }

    /// Build from the raw auth type tag a plugin sent
    pub fn from_tag(supported_auth_type: &str, can_search: bool) -> Result<Self, InvalidCapabilityError> {
        Ok(Self::new(supported_auth_type.parse()?, can_search))
    }

    pub fn supported_auth_type(&self) -> SupportedAuthType {
        self.supported_auth_type
    }

    /// Whether the plugin can search for users
    pub fn can_search(&self) -> bool {
        self.can_search
    }
}
