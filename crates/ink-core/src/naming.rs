//! Document-scoped auto-naming for pages and objects.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Hands out sequential names like `Page1` or `TextBox3`.
///
/// Counters live on the owning [`Document`](crate::Document) rather than in
/// process-wide statics, so every document starts its own numbering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameRegistry {
    counters: HashMap<String, u32>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next name for the given prefix, starting at `{prefix}1`.
    pub fn next(&mut self, prefix: &str) -> String {
        let counter = self.counters.entry(prefix.to_string()).or_insert(0);
        *counter += 1;
        format!("{prefix}{counter}")
    }
}
