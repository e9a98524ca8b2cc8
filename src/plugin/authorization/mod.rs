//! Authorization Extension Support
//!
//! Everything needed to turn an authorization plugin into an
//! [`AuthorizationPluginInfo`]: the extension trait the host calls through,
//! the capability model, response decoding and the builder itself.

pub mod capabilities;
pub mod extension;
pub mod info;
pub mod builder;
pub mod message_converter;
pub mod fixture;

pub use capabilities::{Capabilities, SupportedAuthType};
pub use extension::{AuthorizationExtension, Facet};
pub use info::{AuthorizationPluginInfo, AUTHORIZATION_EXTENSION};
pub use builder::{AuthorizationPluginInfoBuilder, BuilderConfig, QueryMode};
pub use fixture::{FixtureExtension, PluginResponses};
