/*
 * Leaktrace Core - Leak Cause Inference over Reference Chains
 *
 * Given the chain of references that keeps a leaking object reachable
 * (tracked root first, leaking instance last), decide per element whether it
 * is expected to still be alive, then locate the boundary where certainty
 * stops: the references most likely to cause the leak.
 *
 * Feature-First Hexagonal Architecture:
 * - features/reachability/ : Inspector port, field inspectors, inspection chain
 * - features/leak_trace/   : Element model, assembly, cause/connector derivation
 * - config/                : Presets and declarative (YAML/JSON) inspectors
 *
 * Out of scope: heap dump parsing, path finding, rendering.
 */

#![allow(clippy::should_implement_trait)] // Preset::from_str returns ConfigResult

pub mod config;
pub mod errors;
pub mod features;

pub use config::{ConfigError, ConfigResult, InspectionConfig, InspectorSpec, Preset};
pub use errors::{LeakTraceError, MalformedReason, Result};
pub use features::leak_trace::{
    annotate, connector_shape, leak_cause_candidates, maybe_leak_cause, ConnectorShape,
    ElementConflict, Exclusion, HolderKind, LeakReference, LeakTrace, LeakTraceAssembler,
    LeakTraceElement, ReferenceKind, TraceRow,
};
pub use features::reachability::{
    ActivityInspector, Classification, FieldInspector, InspectorChain, InspectorConflict,
    InspectorVote, Reachability, ReachabilityInspector, ViewInspector,
};
