/*
 * Reachability Infrastructure
 *
 * Concrete inspectors implementing the ReachabilityInspector port.
 */

mod built_in;
mod field_inspector;

pub use built_in::{
    ActivityInspector, ViewInspector, ACTIVITY_CLASS, ACTIVITY_DESTROYED_FIELD,
    VIEW_ATTACH_INFO_FIELD, VIEW_CLASS,
};
pub use field_inspector::FieldInspector;
