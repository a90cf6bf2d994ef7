//! Test data builders
//!
//! Builder patterns for leak trace elements and verdict-scripted traces.

use leaktrace_core::{
    FieldInspector, HolderKind, InspectorChain, LeakReference, LeakTraceElement, Reachability,
};

/// Marker class recognised by [`scripted_chain`]
pub const SCRIPTED_CLASS: &str = "test.Scripted";
/// Field read by [`scripted_chain`]
pub const STATE_FIELD: &str = "state";

/// Chain whose single inspector reads the verdict from the `state` field:
/// `dead` → Unreachable, anything else → Reachable, missing → Unknown
pub fn scripted_chain() -> InspectorChain {
    InspectorChain::new().with_inspector(Box::new(FieldInspector::new(
        "ScriptedInspector",
        SCRIPTED_CLASS,
        STATE_FIELD,
        "dead",
    )))
}

/// Elements that [`scripted_chain`] classifies as `verdicts`
pub fn scripted_elements(verdicts: &[Reachability]) -> Vec<LeakTraceElement> {
    let mut builder = TraceBuilder::new();
    for (i, verdict) in verdicts.iter().enumerate() {
        let mut element = LeakTraceElement::new(
            HolderKind::Object,
            [format!("test.Node{}", i), SCRIPTED_CLASS.to_string()],
        );
        match verdict {
            Reachability::Reachable => {
                element = element.with_field(LeakReference::instance_field(STATE_FIELD, "alive"))
            }
            Reachability::Unreachable => {
                element = element.with_field(LeakReference::instance_field(STATE_FIELD, "dead"))
            }
            Reachability::Unknown => {}
        }
        builder = builder.with_element(element, &format!("next{}", i));
    }
    builder.build()
}

/// Builds a root-to-leak element sequence, wiring outgoing references
#[derive(Debug, Default)]
pub struct TraceBuilder {
    elements: Vec<(LeakTraceElement, String)>,
}

impl TraceBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element; `reference_name` is used if it is not the last one
    pub fn with_element(mut self, element: LeakTraceElement, reference_name: &str) -> Self {
        self.elements.push((element, reference_name.to_string()));
        self
    }

    /// Build the final element sequence
    pub fn build(self) -> Vec<LeakTraceElement> {
        let n = self.elements.len();
        self.elements
            .into_iter()
            .enumerate()
            .map(|(i, (element, reference_name))| {
                if i + 1 < n && element.reference.is_none() {
                    element.with_reference(LeakReference::instance_field(
                        reference_name,
                        format!("Object@{}", i + 1),
                    ))
                } else {
                    element
                }
            })
            .collect()
    }
}

/// Static field of an application class holding the chain
pub fn app_root(field: &str) -> LeakTraceElement {
    LeakTraceElement::new(HolderKind::Class, ["com.example.ExampleApplication"])
        .with_reference(LeakReference::static_field(field, "Object@1"))
}

pub fn activity(destroyed: bool) -> LeakTraceElement {
    LeakTraceElement::new(
        HolderKind::Object,
        [
            "com.example.MainActivity",
            "android.app.Activity",
            "android.view.ContextThemeWrapper",
            "android.content.ContextWrapper",
            "android.content.Context",
        ],
    )
    .with_field(LeakReference::instance_field("mDestroyed", destroyed.to_string()))
    .with_field(LeakReference::instance_field("mFinished", destroyed.to_string()))
}

pub fn view(attached: bool) -> LeakTraceElement {
    let attach_info = if attached {
        "android.view.View$AttachInfo@7"
    } else {
        "null"
    };
    LeakTraceElement::new(
        HolderKind::Object,
        ["android.widget.TextView", "android.view.View"],
    )
    .with_field(LeakReference::instance_field("mAttachInfo", attach_info))
}

pub fn plain(class_name: &str) -> LeakTraceElement {
    LeakTraceElement::new(HolderKind::Object, [class_name])
}
