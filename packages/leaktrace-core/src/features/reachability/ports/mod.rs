//! Reachability Ports - Inspector Interface
//!
//! Inspectors encode domain knowledge about *why* an object should or should
//! not still be alive. The core treats them as opaque policy plugins.
//!
//! ## Usage
//! ```rust,ignore
//! use leaktrace_core::features::reachability::ports::ReachabilityInspector;
//!
//! struct FragmentInspector;
//!
//! impl ReachabilityInspector for FragmentInspector {
//!     fn classify(&self, element: &LeakTraceElement) -> Reachability {
//!         // ...
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FragmentInspector"
//!     }
//! }
//! ```

use super::domain::Reachability;
use crate::features::leak_trace::domain::LeakTraceElement;

/// Reachability Inspector Port
///
/// Implementations must be pure: the same element always yields the same
/// verdict, and `Unknown` is returned whenever the inspector has no opinion.
///
/// # Implementors
/// - `FieldInspector` (marker class + named field)
/// - anything registered by the embedding application
pub trait ReachabilityInspector: Send + Sync {
    /// Expected reachability of one element
    fn classify(&self, element: &LeakTraceElement) -> Reachability;

    /// Inspector name for conflict reports and logging
    fn name(&self) -> &str;
}

impl<T: ReachabilityInspector + ?Sized> ReachabilityInspector for Box<T> {
    fn classify(&self, element: &LeakTraceElement) -> Reachability {
        (**self).classify(element)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
