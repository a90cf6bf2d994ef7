/*
 * Leak Trace Elements
 *
 * One hop in the chain of references that keeps a leaking object in memory:
 * - LeakReference: named edge from a holder to the next hop
 * - LeakTraceElement: the holder itself (class hierarchy, fields, annotations)
 *
 * Elements are built by the heap-analysis side and never mutated once they
 * are handed to the assembler.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a holder refers to the next element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    InstanceField,
    StaticField,
    Local,
    ArrayEntry,
}

/// What kind of thing an element is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolderKind {
    Object,
    Class,
    Thread,
    Array,
}

impl HolderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolderKind::Object => "object",
            HolderKind::Class => "class",
            HolderKind::Thread => "thread",
            HolderKind::Array => "array",
        }
    }
}

/// A named, typed connection from a holder object
///
/// `value` is the textual form of the observed value (`"null"` for a null
/// reference), absent when the heap side did not record one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeakReference {
    pub kind: ReferenceKind,
    pub name: String,
    pub value: Option<String>,
}

impl LeakReference {
    pub fn new(kind: ReferenceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            value: None,
        }
    }

    pub fn instance_field(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ReferenceKind::InstanceField, name).with_value(value)
    }

    pub fn static_field(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ReferenceKind::StaticField, name).with_value(value)
    }

    pub fn array_entry(index: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ReferenceKind::ArrayEntry, index).with_value(value)
    }

    pub fn local() -> Self {
        Self::new(ReferenceKind::Local, "")
    }

    /// Builder: Set observed value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Name as shown to a human: `[i]` for array entries, a fixed marker for locals
    pub fn display_name(&self) -> String {
        match self.kind {
            ReferenceKind::ArrayEntry => format!("[{}]", self.name),
            ReferenceKind::StaticField | ReferenceKind::InstanceField => self.name.clone(),
            ReferenceKind::Local => "<Java Local>".to_string(),
        }
    }
}

impl fmt::Display for LeakReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.as_deref().unwrap_or("?");
        match self.kind {
            ReferenceKind::Local => write!(f, "{}", self.display_name()),
            ReferenceKind::StaticField => write!(f, "static {} = {}", self.display_name(), value),
            ReferenceKind::InstanceField | ReferenceKind::ArrayEntry => {
                write!(f, "{} = {}", self.display_name(), value)
            }
        }
    }
}

/// Records that a configured exclusion rule matched an element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Exclusion {
    pub name: Option<String>,
    pub matching: String,
    pub reason: Option<String>,
}

impl Exclusion {
    pub fn new(matching: impl Into<String>) -> Self {
        Self {
            name: None,
            matching: matching.into(),
            reason: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// One reference in the chain that holds a leaking object in memory
///
/// `class_hierarchy` runs from most-derived to least-derived and excludes the
/// universal root type. `reference` is `None` only for the last element of a
/// trace (the leaking instance). Both invariants are checked when the trace is
/// assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeakTraceElement {
    pub holder: HolderKind,
    pub class_hierarchy: Vec<String>,
    pub reference: Option<LeakReference>,
    pub extra: Option<String>,
    pub exclusion: Option<Exclusion>,
    /// All fields (member and static) observed on this object
    pub field_references: Vec<LeakReference>,
}

impl LeakTraceElement {
    pub fn new<I, S>(holder: HolderKind, class_hierarchy: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            holder,
            class_hierarchy: class_hierarchy.into_iter().map(Into::into).collect(),
            reference: None,
            extra: None,
            exclusion: None,
            field_references: Vec::new(),
        }
    }

    /// Builder: Set outgoing reference
    pub fn with_reference(mut self, reference: LeakReference) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Builder: Set extra diagnostic text
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    /// Builder: Set exclusion annotation
    pub fn with_exclusion(mut self, exclusion: Exclusion) -> Self {
        self.exclusion = Some(exclusion);
        self
    }

    /// Builder: Append one observed field
    pub fn with_field(mut self, field: LeakReference) -> Self {
        self.field_references.push(field);
        self
    }

    /// Builder: Append observed fields
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = LeakReference>) -> Self {
        self.field_references.extend(fields);
        self
    }

    /// Most-derived class name (empty only for a malformed element)
    pub fn class_name(&self) -> &str {
        self.class_hierarchy
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Class name without its package qualifier
    pub fn simple_class_name(&self) -> &str {
        let class_name = self.class_name();
        match class_name.rfind('.') {
            Some(separator) => &class_name[separator + 1..],
            None => class_name,
        }
    }

    /// Whether `class_name` appears anywhere in the hierarchy
    pub fn is_instance_of(&self, class_name: &str) -> bool {
        self.class_hierarchy.iter().any(|c| c == class_name)
    }

    /// First observed field named `name`
    pub fn field(&self, name: &str) -> Option<&LeakReference> {
        self.field_references.iter().find(|f| f.name == name)
    }

    pub fn is_excluded(&self) -> bool {
        self.exclusion.is_some()
    }

    pub fn to_detailed_string(&self) -> String {
        let kind = match self.holder {
            HolderKind::Array => "Array of",
            HolderKind::Class => "Class",
            HolderKind::Object | HolderKind::Thread => "Instance of",
        };
        let mut out = format!("* {} {}\n", kind, self.class_name());
        for field in &self.field_references {
            out.push_str(&format!("|   {}\n", field));
        }
        out
    }
}

impl fmt::Display for LeakTraceElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if matches!(&self.reference, Some(r) if r.kind == ReferenceKind::StaticField) {
            write!(f, "static ")?;
        }

        if matches!(self.holder, HolderKind::Array | HolderKind::Thread) {
            write!(f, "{} ", self.holder.as_str())?;
        }

        write!(f, "{}", self.class_name())?;

        match &self.reference {
            Some(reference) => write!(f, ".{}", reference.display_name())?,
            None => write!(f, " instance")?,
        }

        if let Some(extra) = &self.extra {
            write!(f, " {}", extra)?;
        }

        if let Some(exclusion) = &self.exclusion {
            write!(f, " , matching exclusion {}", exclusion.matching)?;
        }

        Ok(())
    }
}
