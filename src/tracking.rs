//! Field-level change tracking for writable resources
//!
//! Every setter on a writable model records the field it touched. Write
//! requests serialize only those fields, so TestRail's partial-update merge
//! leaves the rest of the resource alone. Models decoded from a response
//! start with an empty record.
//!
//! Models opt in through the `#[resource]` attribute from `testrail-macros`,
//! which generates the accessors and the [`Resource`] implementation.

use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Names of the fields assigned since the model was hydrated or last reset.
///
/// Cloning yields an empty record, and the record never takes part in
/// equality between models.
#[derive(Debug, Default)]
pub struct DirtyFields(BTreeSet<&'static str>);

impl DirtyFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assignment to `field`.
    pub fn mark(&mut self, field: &'static str) {
        self.0.insert(field);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Dirty field names in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }
}

impl Clone for DirtyFields {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl PartialEq for DirtyFields {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for DirtyFields {}

/// A writable TestRail resource with per-instance dirty tracking.
pub trait Resource {
    /// Resource kind used in messages, e.g. `"case"`
    const KIND: &'static str;

    /// Fields a caller may assign and transmit, in declaration order
    const WRITABLE_FIELDS: &'static [&'static str];

    fn dirty_fields(&self) -> &DirtyFields;

    fn dirty_fields_mut(&mut self) -> &mut DirtyFields;

    /// Serialize exactly the dirty fields of this resource.
    ///
    /// Fields explicitly cleared are emitted as `null`; untouched fields are
    /// absent.
    fn write_payload(&self) -> serde_json::Result<Map<String, Value>>;

    fn is_dirty(&self, field: &str) -> bool {
        self.dirty_fields().contains(field)
    }

    /// Forget every recorded assignment.
    fn reset(&mut self) {
        self.dirty_fields_mut().clear();
    }
}

/// Serialize nested resources (plan entries, entry runs) through their own
/// dirty records.
pub fn nested_payload<R: Resource>(items: &[R]) -> serde_json::Result<Value> {
    items
        .iter()
        .map(|item| item.write_payload().map(Value::Object))
        .collect::<serde_json::Result<Vec<_>>>()
        .map(Value::Array)
}
