//! Inspection Configuration
//!
//! The programmatic surface is an ordered list of inspectors registered on an
//! [`InspectorChain`](crate::features::reachability::InspectorChain). This
//! module adds a declarative form on top of it:
//! - Level 1: Preset (built-in Android inspectors, or none)
//! - Level 2: Declared field inspectors appended after the preset
//! - Level 3: YAML/JSON file carrying both
//!
//! # Examples
//!
//! ```rust,ignore
//! use leaktrace_core::config::{InspectionConfig, Preset};
//!
//! // Built-ins only
//! let chain = InspectionConfig::from_preset(Preset::Android).build_chain()?;
//!
//! // From a team file
//! let config = InspectionConfig::from_yaml_file("leak-inspectors.yaml")?;
//! let assembler = LeakTraceAssembler::from_config(&config)?;
//! ```

pub mod error;
pub mod inspection_config;
pub mod preset;

pub use error::{ConfigError, ConfigResult};
pub use inspection_config::{InspectionConfig, InspectorSpec, CONFIG_VERSION};
pub use preset::Preset;
