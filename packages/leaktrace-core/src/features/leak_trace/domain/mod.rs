/*
 * Leak Trace Domain Models
 *
 * Core value types: references, elements, the assembled trace and the
 * per-position connector topology.
 */

mod connector;
mod element;
mod trace;

pub use connector::{ConnectorShape, TraceRow};
pub use element::{Exclusion, HolderKind, LeakReference, LeakTraceElement, ReferenceKind};
pub use trace::{ElementConflict, LeakTrace};
