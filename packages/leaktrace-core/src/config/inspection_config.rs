//! Inspection configuration
//!
//! Declarative form of the inspector list: a preset plus field inspectors
//! declared in YAML or JSON.
//!
//! # Schema
//! ```yaml
//! version: 1
//! preset: android
//! strict_conflicts: false
//! inspectors:
//!   - name: DialogInspector
//!     marker_class: android.app.Dialog
//!     field: mShowing
//!     unreachable_value: "false"
//!     holders: [object]
//! ```
//!
//! Preset inspectors are registered first, declared ones follow in file
//! order. Registration order is the order conflicts are resolved in.

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use crate::features::leak_trace::domain::HolderKind;
use crate::features::reachability::{FieldInspector, InspectorChain, ReachabilityInspector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Current configuration schema version
pub const CONFIG_VERSION: u32 = 1;

/// One declared field inspector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InspectorSpec {
    /// Unique inspector name (used in conflict reports)
    pub name: String,

    /// Class that must appear in the element's hierarchy
    pub marker_class: String,

    /// Field whose observed value decides the verdict
    pub field: String,

    /// Value meaning "expected unreachable"; anything else means reachable
    pub unreachable_value: String,

    /// Accepted holder kinds (empty = all)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holders: Vec<HolderKind>,
}

impl InspectorSpec {
    pub fn new(
        name: impl Into<String>,
        marker_class: impl Into<String>,
        field: impl Into<String>,
        unreachable_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            marker_class: marker_class.into(),
            field: field.into(),
            unreachable_value: unreachable_value.into(),
            holders: Vec::new(),
        }
    }

    /// Builder: Restrict holder kinds
    pub fn holders(mut self, holders: impl IntoIterator<Item = HolderKind>) -> Self {
        self.holders = holders.into_iter().collect();
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("marker_class", &self.marker_class),
            ("field", &self.field),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("inspectors.{}", field),
                    format!("inspector '{}' must set a non-empty {}", self.name, field),
                ));
            }
        }
        Ok(())
    }

    pub fn to_inspector(&self) -> FieldInspector {
        FieldInspector::new(
            &self.name,
            &self.marker_class,
            &self.field,
            &self.unreachable_value,
        )
        .with_holders(self.holders.iter().copied())
    }
}

/// Inspection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InspectionConfig {
    /// Schema version (must be 1)
    pub version: u32,

    /// Built-in inspectors registered first
    #[serde(default)]
    pub preset: Preset,

    /// Fail assembly on inspector conflicts instead of recording them
    #[serde(default)]
    pub strict_conflicts: bool,

    /// Declared field inspectors, registered after the preset
    #[serde(default)]
    pub inspectors: Vec<InspectorSpec>,
}

impl InspectionConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            version: CONFIG_VERSION,
            preset,
            strict_conflicts: false,
            inspectors: Vec::new(),
        }
    }

    /// Builder: Set strict conflict handling
    pub fn strict_conflicts(mut self, v: bool) -> Self {
        self.strict_conflicts = v;
        self
    }

    /// Builder: Declare an inspector
    pub fn with_inspector(mut self, spec: InspectorSpec) -> Self {
        self.inspectors.push(spec);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: vec![CONFIG_VERSION],
            });
        }

        let mut names: HashSet<&str> = self.preset.inspector_names().iter().copied().collect();
        for spec in &self.inspectors {
            spec.validate()?;
            if !names.insert(spec.name.as_str()) {
                return Err(ConfigError::DuplicateInspector(spec.name.clone()));
            }
        }

        Ok(())
    }

    /// Validated inspectors, preset first
    pub fn inspectors(&self) -> ConfigResult<Vec<Box<dyn ReachabilityInspector>>> {
        self.validate()?;

        let mut inspectors = self.preset.inspectors();
        inspectors.extend(
            self.inspectors
                .iter()
                .map(|spec| Box::new(spec.to_inspector()) as Box<dyn ReachabilityInspector>),
        );
        Ok(inspectors)
    }

    pub fn build_chain(&self) -> ConfigResult<InspectorChain> {
        Ok(InspectorChain::new().with_inspectors(self.inspectors()?))
    }

    /// Load from YAML text
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if value.get("version").is_none() {
            return Err(ConfigError::MissingVersion);
        }
        let config: Self = serde_yaml::from_value(value)?;
        config.validate()?;
        config.log_loaded("yaml");
        Ok(config)
    }

    /// Load from JSON text
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("version").is_none() {
            return Err(ConfigError::MissingVersion);
        }
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        config.log_loaded("json");
        Ok(config)
    }

    /// Load from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn log_loaded(&self, format: &str) {
        tracing::info!(
            "inspection config loaded from {} (preset={}, declared_inspectors={}, strict={})",
            format,
            self.preset.as_str(),
            self.inspectors.len(),
            self.strict_conflicts
        );
    }
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Android)
    }
}
