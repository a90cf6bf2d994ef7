/*
 * Built-in Inspectors
 *
 * Standard inspector definitions for Android framework objects:
 * - ActivityInspector: destroyed activities should be garbage
 * - ViewInspector: detached views should be garbage
 *
 * Both are plain FieldInspector instances; the Android preset registers them
 * in this order.
 */

use super::field_inspector::FieldInspector;

pub const ACTIVITY_CLASS: &str = "android.app.Activity";
pub const ACTIVITY_DESTROYED_FIELD: &str = "mDestroyed";

pub const VIEW_CLASS: &str = "android.view.View";
pub const VIEW_ATTACH_INFO_FIELD: &str = "mAttachInfo";

/// Activity inspector
///
/// Marker: `android.app.Activity`
///
/// - `mDestroyed == "true"` → Unreachable
/// - any other value       → Reachable
/// - field missing         → Unknown
pub struct ActivityInspector;

impl ActivityInspector {
    pub const NAME: &'static str = "ActivityInspector";

    /// # Example
    /// ```ignore
    /// let chain = InspectorChain::new().with_inspector(Box::new(ActivityInspector::define()));
    /// ```
    pub fn define() -> FieldInspector {
        FieldInspector::new(
            Self::NAME,
            ACTIVITY_CLASS,
            ACTIVITY_DESTROYED_FIELD,
            true.to_string(),
        )
    }
}

/// View inspector
///
/// Marker: `android.view.View`
///
/// - `mAttachInfo == "null"` → Unreachable (detached)
/// - any other value        → Reachable
/// - field missing          → Unknown
pub struct ViewInspector;

impl ViewInspector {
    pub const NAME: &'static str = "ViewInspector";

    pub fn define() -> FieldInspector {
        FieldInspector::new(Self::NAME, VIEW_CLASS, VIEW_ATTACH_INFO_FIELD, "null")
    }
}
