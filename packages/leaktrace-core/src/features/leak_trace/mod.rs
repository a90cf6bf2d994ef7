//! Leak Trace - Assembly & Leak-Cause Inference
//!
//! ```text
//! LeakTraceElement[] (root → leaking instance, built by the heap side)
//!     │
//!     ├──> LeakTraceAssembler
//!     │      ├─ Validate input contract
//!     │      ├─ InspectorChain::classify per element
//!     │      └─ Record / reject inspector conflicts
//!     │
//!     └──> LeakTrace (immutable)
//!            ├─ maybe_leak_cause(i)
//!            ├─ connector_shape(i)
//!            └─ annotate() → TraceRow[] for renderers
//! ```

pub mod application;
pub mod domain;

pub use application::{
    annotate, connector_shape, leak_cause_candidates, maybe_leak_cause, LeakTraceAssembler,
};
pub use domain::{
    ConnectorShape, ElementConflict, Exclusion, HolderKind, LeakReference, LeakTrace,
    LeakTraceElement, ReferenceKind, TraceRow,
};
