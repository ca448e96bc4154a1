//! Observable, string-encoded object properties.

use crate::sync::PropertyRef;
use serde::{Deserialize, Serialize};

/// How a property value is edited in the property panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    /// Shown as a checkbox; value is `"True"` or `"False"`.
    Boolean,
    /// Chosen from a fixed list of allowed values.
    List,
    /// Free-form text input.
    Input,
}

/// A named, observable value cell with history.
///
/// Values are stored string-encoded regardless of kind; validating numeric or
/// color content is the owning object's concern, not the property's. Every
/// assignment through [`set_value`](Property::set_value) appends to the
/// history; restoration reads the history without rewriting it, so repeated
/// restores of the same entry are idempotent.
///
/// The synchronization fields (`source`, `sync_enabled`) mirror the edge held
/// in the document's [`SyncGraph`](crate::SyncGraph); they are maintained by
/// [`Document`](crate::Document) operations, never set directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    name: String,
    kind: PropertyKind,
    value: String,
    default_value: String,
    value_list: Option<Vec<String>>,
    history: Vec<String>,
    source: Option<PropertyRef>,
    sync_enabled: bool,
}

impl Property {
    /// Create a property of the given kind. The default value becomes the
    /// current value and the first history entry.
    pub fn new(name: &str, kind: PropertyKind, default_value: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            value: default_value.to_string(),
            default_value: default_value.to_string(),
            value_list: None,
            history: vec![default_value.to_string()],
            source: None,
            sync_enabled: false,
        }
    }

    /// Create a `List` property with its allowed values.
    pub fn with_values(name: &str, default_value: &str, values: &[&str]) -> Self {
        let mut property = Self::new(name, PropertyKind::List, default_value);
        property.value_list = Some(values.iter().map(|v| v.to_string()).collect());
        property
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Allowed values; `Some` only for `List` properties.
    pub fn value_list(&self) -> Option<&[String]> {
        self.value_list.as_deref()
    }

    /// Past values, oldest first. The current value is the last entry.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn sync_enabled(&self) -> bool {
        self.sync_enabled
    }

    /// The property this one is synchronized to, if any.
    pub fn source(&self) -> Option<&PropertyRef> {
        self.source.as_ref()
    }

    /// Store a new value and append it to the history.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.history.push(value.to_string());
    }

    /// Restore the history entry at `index` (0 = most recent) as the current
    /// value without appending a new history entry.
    ///
    /// Out-of-bounds indices are a no-op. Returns the restored value.
    pub fn restore_value(&mut self, index: usize) -> Option<&str> {
        let entry = self.history.len().checked_sub(index + 1)?;
        self.value = self.history[entry].clone();
        Some(&self.value)
    }

    /// Set the value back to the default. Appends to history like any other
    /// assignment.
    pub fn reset(&mut self) {
        let default = self.default_value.clone();
        self.set_value(&default);
    }

    /// Drop all history entries. Subsequent restores are no-ops until new
    /// values are set.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub(crate) fn set_sync_source(&mut self, source: Option<PropertyRef>) {
        self.sync_enabled = source.is_some();
        self.source = source;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_history_entry() {
        let property = Property::new("FontSize", PropertyKind::Input, "18");
        assert_eq!(property.value(), "18");
        assert_eq!(property.history(), ["18"]);
    }

    #[test]
    fn test_set_value_appends_history() {
        let mut property = Property::new("Text", PropertyKind::Input, "A");
        property.set_value("B");
        property.set_value("C");
        assert_eq!(property.value(), "C");
        assert_eq!(property.history(), ["A", "B", "C"]);
    }

    #[test]
    fn test_restore_most_recent() {
        let mut property = Property::new("Text", PropertyKind::Input, "A");
        property.set_value("B");
        property.set_value("C");
        // Index 0 is the most recent entry, which is the current value.
        assert_eq!(property.restore_value(0), Some("C"));
        assert_eq!(property.restore_value(1), Some("B"));
        assert_eq!(property.value(), "B");
        // Restoration never appends, so the history is unchanged.
        assert_eq!(property.history(), ["A", "B", "C"]);
    }

    #[test]
    fn test_restore_is_idempotent() {
        let mut property = Property::new("Text", PropertyKind::Input, "A");
        property.set_value("B");
        property.restore_value(1);
        property.restore_value(1);
        assert_eq!(property.value(), "A");
        assert_eq!(property.history(), ["A", "B"]);
    }

    #[test]
    fn test_restore_out_of_bounds_is_noop() {
        let mut property = Property::new("Text", PropertyKind::Input, "A");
        assert_eq!(property.restore_value(5), None);
        assert_eq!(property.value(), "A");
    }

    #[test]
    fn test_reset_appends() {
        let mut property = Property::new("Text", PropertyKind::Input, "A");
        property.set_value("B");
        property.reset();
        assert_eq!(property.value(), "A");
        assert_eq!(property.history(), ["A", "B", "A"]);
    }

    #[test]
    fn test_clear_history() {
        let mut property = Property::new("Text", PropertyKind::Input, "A");
        property.set_value("B");
        property.clear_history();
        assert!(property.history().is_empty());
        assert_eq!(property.restore_value(0), None);
        assert_eq!(property.value(), "B");
    }

    #[test]
    fn test_value_list() {
        let property =
            Property::with_values("Alignment", "Left", &["Left", "Right", "Center", "Justify"]);
        assert_eq!(property.kind(), PropertyKind::List);
        assert_eq!(property.value_list().map(|v| v.len()), Some(4));
    }
}
