//! Component registry for mounting the icon renderer in a host application
//!
//! A host template layer owns one or more [`ComponentRegistry`] instances
//! and mounts the renderer under a public name of its choosing. Both the
//! name and the registry are explicit parameters; nothing here reads
//! ambient configuration.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::dataset::IconSet;
use crate::error::IconError;
use crate::resolver::{resolve, RenderRequest, RenderedIcon};

/// Name the icon component is mounted under when the host does not choose one
pub const DEFAULT_COMPONENT_NAME: &str = "icon";

/// Errors that can occur during component registration
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Component not present in the registry
    #[error("component not registered: {name}")]
    NotRegistered { name: String },

    /// A component already holds this name
    #[error("duplicate component registration: {name}")]
    Duplicate { name: String },
}

/// The icon renderer bound to a shared dataset
#[derive(Debug, Clone)]
pub struct IconComponent {
    icons: Arc<IconSet>,
}

impl IconComponent {
    pub fn new(icons: Arc<IconSet>) -> Self {
        Self { icons }
    }

    /// A component over the bundled dataset
    pub fn bundled() -> Self {
        Self::new(IconSet::bundled())
    }

    /// Resolve one render request against this component's dataset
    pub fn resolve(&self, request: &RenderRequest) -> Result<RenderedIcon, IconError> {
        resolve(&self.icons, request)
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }
}

/// Registry for named components
///
/// Separate instances are fully isolated; registering in one never affects
/// another.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, IconComponent>,
}

impl ComponentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under a public name
    pub fn register(
        &mut self,
        name: impl Into<String>,
        component: IconComponent,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.components.contains_key(&name) {
            return Err(RegistryError::Duplicate { name });
        }
        self.components.insert(name, component);
        Ok(())
    }

    /// Remove a component, returning it
    pub fn unregister(&mut self, name: &str) -> Result<IconComponent, RegistryError> {
        self.components
            .remove(name)
            .ok_or_else(|| RegistryError::NotRegistered {
                name: name.to_string(),
            })
    }

    /// Get a component by name
    pub fn get(&self, name: &str) -> Option<&IconComponent> {
        self.components.get(name)
    }

    /// Check if a component exists
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// All registered component names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(|name| name.as_str())
    }
}

/// How the icon component should be mounted
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Public name the component answers to
    pub component_name: String,
    /// Dataset to serve; the bundled set when absent
    pub icons: Option<Arc<IconSet>>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            icons: None,
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount under an operator-chosen name instead of the default
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    /// Serve a custom dataset instead of the bundled one
    pub fn with_icons(mut self, icons: Arc<IconSet>) -> Self {
        self.icons = Some(icons);
        self
    }
}

/// Mount the icon component into a registry per the given configuration
pub fn register_icon_component(
    registry: &mut ComponentRegistry,
    config: &RegistryConfig,
) -> Result<(), RegistryError> {
    let icons = config.icons.clone().unwrap_or_else(IconSet::bundled);
    registry.register(config.component_name.clone(), IconComponent::new(icons))
}
