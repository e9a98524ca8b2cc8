//! Plugin Error Types
//!
//! Errors raised while querying an authorization plugin and while assembling
//! its descriptor. A facet the plugin simply does not implement is never an
//! error; it is reported as `None` by the extension.

use thiserror::Error;
use crate::plugin::authorization::extension::Facet;

/// Result type for extension queries
pub type ExtensionResult<T> = Result<T, ExtensionError>;

/// Result type for plugin info assembly
pub type PluginInfoResult<T> = Result<T, PluginInfoBuildError>;

/// A plugin declared an authentication type the host does not know
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported authentication type '{tag}'")]
pub struct InvalidCapabilityError {
    /// The tag exactly as the plugin sent it
    pub tag: String,
}

impl InvalidCapabilityError {
    /// Create an invalid capability error for a tag
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self { tag: tag.into() }
    }
}

/// Failures of a single call against the authorization extension
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    /// The plugin process could not be reached or did not answer
    #[error("Transport error talking to plugin {plugin_id}: {message}")]
    Transport { plugin_id: String, message: String },

    /// The plugin answered with a body that could not be decoded
    #[error("Malformed response from plugin {plugin_id}: {message}")]
    Protocol { plugin_id: String, message: String },

    /// No plugin with this id is known to the extension
    #[error("Plugin not found: {plugin_id}")]
    PluginNotFound { plugin_id: String },

    /// Capability data carried an unrecognised value
    #[error(transparent)]
    InvalidCapability(#[from] InvalidCapabilityError),
}

impl ExtensionError {
    /// Create a transport error
    pub fn transport<P: Into<String>, S: Into<String>>(plugin_id: P, message: S) -> Self {
        Self::Transport { plugin_id: plugin_id.into(), message: message.into() }
    }

    /// Create a protocol error
    pub fn protocol<P: Into<String>, S: Into<String>>(plugin_id: P, message: S) -> Self {
        Self::Protocol { plugin_id: plugin_id.into(), message: message.into() }
    }

    /// Create a plugin not found error
    pub fn plugin_not_found<P: Into<String>>(plugin_id: P) -> Self {
        Self::PluginNotFound { plugin_id: plugin_id.into() }
    }

    /// Check if retrying the call could succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ExtensionError::Transport { .. })
    }
}

/// Failure to assemble the descriptor of one plugin
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PluginInfoBuildError {
    /// One of the extension calls failed
    #[error("Failed to query {facet} for plugin {plugin_id}: {source}")]
    QueryFailed {
        plugin_id: String,
        facet: Facet,
        #[source]
        source: ExtensionError,
    },

    /// The plugin declared capabilities the host cannot represent
    #[error("Plugin {plugin_id} declared invalid capabilities: {source}")]
    InvalidCapability {
        plugin_id: String,
        #[source]
        source: InvalidCapabilityError,
    },
}

impl PluginInfoBuildError {
    /// Wrap an extension failure with the plugin and facet it happened on
    pub fn from_extension<P: Into<String>>(plugin_id: P, facet: Facet, error: ExtensionError) -> Self {
        match error {
            ExtensionError::InvalidCapability(source) => Self::InvalidCapability {
                plugin_id: plugin_id.into(),
                source,
            },
            source => Self::QueryFailed {
                plugin_id: plugin_id.into(),
                facet,
                source,
            },
        }
    }

    /// Id of the plugin whose build failed
    pub fn plugin_id(&self) -> &str {
        match self {
            Self::QueryFailed { plugin_id, .. } | Self::InvalidCapability { plugin_id, .. } => plugin_id,
        }
    }

    /// Facet whose query failed
    pub fn facet(&self) -> Facet {
        match self {
            Self::QueryFailed { facet, .. } => *facet,
            Self::InvalidCapability { .. } => Facet::Capabilities,
        }
    }

    /// Check if rebuilding later could succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::QueryFailed { source, .. } => source.is_recoverable(),
            Self::InvalidCapability { .. } => false,
        }
    }
}
