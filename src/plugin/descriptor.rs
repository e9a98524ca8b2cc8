//! Plugin Descriptor
//!
//! Identity record of an installed plugin as handed over by the plugin
//! registry. Only the id is interpreted by this crate; everything else is
//! carried through untouched.

use std::path::PathBuf;
use serde::{Serialize, Deserialize};

/// Descriptor of an installed plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Plugin id, the correlation key for every extension call
    id: String,

    /// Plugin version as declared by the plugin
    #[serde(default)]
    version: Option<String>,

    /// Human oriented information about the plugin
    #[serde(default)]
    about: Option<PluginAbout>,

    /// Location of the plugin artifact
    #[serde(default)]
    file_location: Option<PathBuf>,

    /// Whether the plugin ships with the host
    #[serde(default)]
    bundled: bool,
}

/// Human oriented plugin information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginAbout {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
}

impl PluginDescriptor {
    /// Create a descriptor carrying only an id
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            version: None,
            about: None,
            file_location: None,
            bundled: false,
        }
    }

    /// Set the declared version
    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the about information
    pub fn with_about(mut self, about: PluginAbout) -> Self {
        self.about = Some(about);
        self
    }

    /// Set the artifact location
    pub fn with_file_location<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.file_location = Some(path.into());
        self
    }

    /// Mark the plugin as bundled with the host
    pub fn bundled(mut self, bundled: bool) -> Self {
        self.bundled = bundled;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn about(&self) -> Option<&PluginAbout> {
        self.about.as_ref()
    }

    pub fn file_location(&self) -> Option<&PathBuf> {
        self.file_location.as_ref()
    }

    pub fn is_bundled(&self) -> bool {
        self.bundled
    }
}
