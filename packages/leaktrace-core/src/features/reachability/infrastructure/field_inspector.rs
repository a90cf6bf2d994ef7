/*
 * Field Inspector
 *
 * Holder-kind-gated inspector driven by one named field:
 * 1. holder kind not accepted           → Unknown
 * 2. marker class not in the hierarchy  → Unknown (fields are not looked at)
 * 3. field absent, or no observed value → Unknown
 * 4. value == unreachable_value         → Unreachable
 * 5. any other value                    → Reachable
 *
 * Field lookup is a linear scan over the element's fields; the first field
 * with a matching name decides.
 */

use super::super::domain::Reachability;
use super::super::ports::ReachabilityInspector;
use crate::features::leak_trace::domain::{HolderKind, LeakTraceElement};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInspector {
    name: String,
    marker_class: String,
    field: String,
    unreachable_value: String,
    /// Accepted holder kinds; empty accepts all
    holders: Vec<HolderKind>,
}

impl FieldInspector {
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

    /// Builder: Restrict to the given holder kinds
    pub fn with_holders(mut self, holders: impl IntoIterator<Item = HolderKind>) -> Self {
        self.holders = holders.into_iter().collect();
        self
    }

    pub fn marker_class(&self) -> &str {
        &self.marker_class
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn unreachable_value(&self) -> &str {
        &self.unreachable_value
    }

    pub fn holders(&self) -> &[HolderKind] {
        &self.holders
    }

    fn accepts_holder(&self, holder: HolderKind) -> bool {
        self.holders.is_empty() || self.holders.contains(&holder)
    }
}

impl ReachabilityInspector for FieldInspector {
    fn classify(&self, element: &LeakTraceElement) -> Reachability {
        if !self.accepts_holder(element.holder) || !element.is_instance_of(&self.marker_class) {
            return Reachability::Unknown;
        }

        match element.field(&self.field).and_then(|f| f.value.as_deref()) {
            Some(value) if value == self.unreachable_value => Reachability::Unreachable,
            Some(_) => Reachability::Reachable,
            None => Reachability::Unknown,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::leak_trace::domain::LeakReference;

    fn dialog_inspector() -> FieldInspector {
        FieldInspector::new("dialog", "android.app.Dialog", "mShowing", "false")
    }

    fn dialog(showing: Option<&str>) -> LeakTraceElement {
        let element = LeakTraceElement::new(
            HolderKind::Object,
            ["com.example.AlertDialog", "android.app.Dialog"],
        );
        match showing {
            Some(v) => element.with_field(LeakReference::instance_field("mShowing", v)),
            None => element,
        }
    }

    #[test]
    fn test_matching_value_is_unreachable() {
        assert_eq!(
            dialog_inspector().classify(&dialog(Some("false"))),
            Reachability::Unreachable
        );
    }

    #[test]
    fn test_other_value_is_reachable() {
        assert_eq!(
            dialog_inspector().classify(&dialog(Some("true"))),
            Reachability::Reachable
        );
    }

    #[test]
    fn test_missing_field_is_unknown() {
        assert_eq!(dialog_inspector().classify(&dialog(None)), Reachability::Unknown);
    }

    #[test]
    fn test_field_without_value_is_unknown() {
        let element = LeakTraceElement::new(HolderKind::Object, ["android.app.Dialog"])
            .with_field(LeakReference::new(
                crate::features::leak_trace::domain::ReferenceKind::InstanceField,
                "mShowing",
            ));
        assert_eq!(dialog_inspector().classify(&element), Reachability::Unknown);
    }

    #[test]
    fn test_marker_absent_ignores_fields() {
        let element = LeakTraceElement::new(HolderKind::Object, ["com.example.Presenter"])
            .with_field(LeakReference::instance_field("mShowing", "false"));
        assert_eq!(dialog_inspector().classify(&element), Reachability::Unknown);
    }

    #[test]
    fn test_holder_gate() {
        let inspector = dialog_inspector().with_holders([HolderKind::Class]);
        assert_eq!(inspector.classify(&dialog(Some("false"))), Reachability::Unknown);

        let inspector = dialog_inspector().with_holders([HolderKind::Object, HolderKind::Class]);
        assert_eq!(
            inspector.classify(&dialog(Some("false"))),
            Reachability::Unreachable
        );
    }
}
