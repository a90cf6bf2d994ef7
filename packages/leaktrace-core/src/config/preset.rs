//! Preset configurations
//!
//! Presets decide which built-in inspectors are registered before any
//! declared ones.

use super::error::{ConfigError, ConfigResult};
use crate::features::reachability::{
    ActivityInspector, ReachabilityInspector, ViewInspector,
};
use serde::{Deserialize, Serialize};

/// Inspector preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Android framework objects
    ///
    /// - ActivityInspector (mDestroyed)
    /// - ViewInspector (mAttachInfo)
    Android,

    /// No built-ins; only declared inspectors
    Empty,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "empty" => Ok(Self::Empty),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Empty => "empty",
        }
    }

    /// Built-in inspectors, in registration order
    pub fn inspectors(&self) -> Vec<Box<dyn ReachabilityInspector>> {
        match self {
            Self::Android => vec![
                Box::new(ActivityInspector::define()),
                Box::new(ViewInspector::define()),
            ],
            Self::Empty => Vec::new(),
        }
    }

    /// Names of the built-in inspectors
    pub fn inspector_names(&self) -> &'static [&'static str] {
        match self {
            Self::Android => &[ActivityInspector::NAME, ViewInspector::NAME],
            Self::Empty => &[],
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Android
    }
}
