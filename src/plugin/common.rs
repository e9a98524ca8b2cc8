//! Common Plugin Value Types
//!
//! Immutable values shared by every extension type: configuration property
//! descriptors, views, paired instance settings and icons.

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use serde_json::Number;

/// Metadata key marking a property as secret
pub const SECURE: &str = "secure";

/// Metadata key marking a property as mandatory
pub const REQUIRED: &str = "required";

/// A single metadata value attached to a configuration property
///
/// Plugins may attach arbitrary scalar metadata, including explicit nulls
/// and fractional numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Bool(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Number(value.into())
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

/// Descriptor of one configuration property a plugin accepts
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigurationProperty {
    key: String,

    #[serde(default)]
    metadata: BTreeMap<String, MetadataValue>,
}

impl ConfigurationProperty {
    /// Create a property descriptor
    pub fn new<K, I, M, V>(key: K, metadata: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (M, V)>,
        M: Into<String>,
        V: Into<MetadataValue>,
    {
        Self {
            key: key.into(),
            metadata: metadata
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn metadata(&self) -> &BTreeMap<String, MetadataValue> {
        &self.metadata
    }

    /// Whether the value of this property must be stored encrypted
    pub fn is_secure(&self) -> bool {
        self.flag(SECURE)
    }

    /// Whether the property must be supplied
    pub fn is_required(&self) -> bool {
        self.flag(REQUIRED)
    }

    fn flag(&self, name: &str) -> bool {
        matches!(self.metadata.get(name), Some(MetadataValue::Bool(true)))
    }
}

/// Opaque rendering template supplied by a plugin
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginView {
    template: String,
}

impl PluginView {
    pub fn new<S: Into<String>>(template: S) -> Self {
        Self { template: template.into() }
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

/// Configuration schema paired with its view for one pluggable surface
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceSettings {
    configurations: Vec<ConfigurationProperty>,
    view: PluginView,
}

impl InstanceSettings {
    pub fn new(configurations: Vec<ConfigurationProperty>, view: PluginView) -> Self {
        Self { configurations, view }
    }

    /// Property descriptors in the order the plugin declared them
    pub fn configurations(&self) -> &[ConfigurationProperty] {
        &self.configurations
    }

    pub fn view(&self) -> &PluginView {
        &self.view
    }

    /// Look up a property descriptor by key
    pub fn configuration(&self, key: &str) -> Option<&ConfigurationProperty> {
        self.configurations.iter().find(|property| property.key == key)
    }
}

/// Display icon of a plugin
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    content_type: String,
    data: String,
}

impl Image {
    pub fn new<C: Into<String>, D: Into<String>>(content_type: C, data: D) -> Self {
        Self {
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Base64 encoded image payload
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Render as a `data:` URI suitable for an `<img src>` attribute
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.content_type, self.data)
    }
}
