//! The property synchronization graph.
//!
//! Synchronization is a one-way subscription from a dependent property to a
//! source property of the same kind. Instead of scattering event handler
//! registrations across objects, the relation is kept as an explicit directed
//! graph owned by the document: edges can be added, removed and queried in one
//! place, teardown on object removal is a single graph operation, and cycle
//! rejection is a reachability walk over the edge set.
//!
//! Each dependent has at most one source, so the walk from a proposed source
//! follows a simple chain of source links. A cycle of any length (including
//! the direct two-property case) would make synchronous propagation recurse
//! forever, so such edges are rejected outright.

use crate::objects::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Identifies a property by owning object and property name.
///
/// This is a lookup key, not an owning reference; the referenced property may
/// disappear when its object is removed, which is why removal runs graph
/// teardown first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyRef {
    pub object: ObjectId,
    pub property: String,
}

impl PropertyRef {
    pub fn new(object: ObjectId, property: impl Into<String>) -> Self {
        Self {
            object,
            property: property.into(),
        }
    }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.object, self.property)
    }
}

/// Why a synchronization request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("object not found in document")]
    ObjectNotFound,
    #[error("property {0:?} not found on object")]
    PropertyNotFound(String),
    #[error("source and dependent property kinds differ")]
    KindMismatch,
    #[error("a property cannot be synchronized with itself")]
    SelfSync,
    #[error("synchronizing would create a cycle")]
    WouldCycle,
}

/// One edge of the graph, as serialized. JSON objects only take string keys,
/// so the graph round-trips through a flat edge list and the maps are rebuilt
/// on load.
#[derive(Serialize, Deserialize)]
struct SyncEdge {
    dependent: PropertyRef,
    source: PropertyRef,
}

/// Directed synchronization relation: dependent property -> source property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<SyncEdge>", into = "Vec<SyncEdge>")]
pub struct SyncGraph {
    /// At most one source per dependent.
    sources: HashMap<PropertyRef, PropertyRef>,
    /// Reverse index for propagation: source -> dependents.
    dependents: HashMap<PropertyRef, Vec<PropertyRef>>,
}

impl SyncGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges in the graph.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// The source the dependent is subscribed to, if any.
    pub fn source_of(&self, dependent: &PropertyRef) -> Option<&PropertyRef> {
        self.sources.get(dependent)
    }

    /// Direct dependents of a source property.
    pub fn dependents_of(&self, source: &PropertyRef) -> Vec<PropertyRef> {
        self.dependents.get(source).cloned().unwrap_or_default()
    }

    /// Whether `dependent` is reachable from `start` by following source
    /// links. Out-degree is at most one, so this walks a single chain.
    fn reaches(&self, start: &PropertyRef, dependent: &PropertyRef) -> bool {
        let mut current = start;
        while let Some(next) = self.sources.get(current) {
            if next == dependent {
                return true;
            }
            current = next;
        }
        false
    }

    /// Subscribe `dependent` to `source`, replacing any existing edge from
    /// `dependent`.
    ///
    /// Rejects self-subscription and any edge that would close a cycle, of
    /// whatever length.
    pub fn add_edge(&mut self, dependent: PropertyRef, source: PropertyRef) -> Result<(), SyncError> {
        if dependent == source {
            return Err(SyncError::SelfSync);
        }
        if self.reaches(&source, &dependent) {
            return Err(SyncError::WouldCycle);
        }
        self.remove_edge(&dependent);
        self.dependents
            .entry(source.clone())
            .or_default()
            .push(dependent.clone());
        self.sources.insert(dependent, source);
        Ok(())
    }

    /// Remove the dependent's subscription. Idempotent; returns whether an
    /// edge existed.
    pub fn remove_edge(&mut self, dependent: &PropertyRef) -> bool {
        let Some(source) = self.sources.remove(dependent) else {
            return false;
        };
        if let Some(deps) = self.dependents.get_mut(&source) {
            deps.retain(|d| d != dependent);
            if deps.is_empty() {
                self.dependents.remove(&source);
            }
        }
        true
    }

    /// Remove every edge touching the given object, in either role.
    ///
    /// Returns the dependents on *other* objects that lost their source, so
    /// the caller can clear their synchronization flags before the object is
    /// actually removed.
    pub fn detach_object(&mut self, object: ObjectId) -> Vec<PropertyRef> {
        let touched: Vec<PropertyRef> = self
            .sources
            .iter()
            .filter(|(dependent, source)| {
                dependent.object == object || source.object == object
            })
            .map(|(dependent, _)| dependent.clone())
            .collect();
        for dependent in &touched {
            self.remove_edge(dependent);
        }
        touched.into_iter().filter(|d| d.object != object).collect()
    }
}

impl From<SyncGraph> for Vec<SyncEdge> {
    fn from(graph: SyncGraph) -> Self {
        graph
            .sources
            .into_iter()
            .map(|(dependent, source)| SyncEdge { dependent, source })
            .collect()
    }
}

impl From<Vec<SyncEdge>> for SyncGraph {
    fn from(edges: Vec<SyncEdge>) -> Self {
        let mut graph = SyncGraph::new();
        for edge in edges {
            graph
                .dependents
                .entry(edge.source.clone())
                .or_default()
                .push(edge.dependent.clone());
            graph.sources.insert(edge.dependent, edge.source);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn prop(object: ObjectId, name: &str) -> PropertyRef {
        PropertyRef::new(object, name)
    }

    #[test]
    fn test_add_and_query_edge() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut graph = SyncGraph::new();
        graph.add_edge(prop(a, "Foreground"), prop(b, "Foreground")).unwrap();

        assert_eq!(graph.source_of(&prop(a, "Foreground")), Some(&prop(b, "Foreground")));
        assert_eq!(graph.dependents_of(&prop(b, "Foreground")), vec![prop(a, "Foreground")]);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_rejects_self_sync() {
        let a = Uuid::new_v4();
        let mut graph = SyncGraph::new();
        let err = graph.add_edge(prop(a, "Text"), prop(a, "Text")).unwrap_err();
        assert_eq!(err, SyncError::SelfSync);
    }

    #[test]
    fn test_rejects_two_cycle() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut graph = SyncGraph::new();
        graph.add_edge(prop(a, "Text"), prop(b, "Text")).unwrap();
        let err = graph.add_edge(prop(b, "Text"), prop(a, "Text")).unwrap_err();
        assert_eq!(err, SyncError::WouldCycle);
    }

    #[test]
    fn test_rejects_longer_cycle() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut graph = SyncGraph::new();
        graph.add_edge(prop(a, "Text"), prop(b, "Text")).unwrap();
        graph.add_edge(prop(b, "Text"), prop(c, "Text")).unwrap();
        let err = graph.add_edge(prop(c, "Text"), prop(a, "Text")).unwrap_err();
        assert_eq!(err, SyncError::WouldCycle);
    }

    #[test]
    fn test_replacing_edge_keeps_reverse_index_clean() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut graph = SyncGraph::new();
        graph.add_edge(prop(a, "Text"), prop(b, "Text")).unwrap();
        graph.add_edge(prop(a, "Text"), prop(c, "Text")).unwrap();

        assert!(graph.dependents_of(&prop(b, "Text")).is_empty());
        assert_eq!(graph.dependents_of(&prop(c, "Text")), vec![prop(a, "Text")]);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_remove_edge_is_idempotent() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut graph = SyncGraph::new();
        graph.add_edge(prop(a, "Text"), prop(b, "Text")).unwrap();
        assert!(graph.remove_edge(&prop(a, "Text")));
        assert!(!graph.remove_edge(&prop(a, "Text")));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_detach_object_both_roles() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut graph = SyncGraph::new();
        // b is a source for a, and a dependent of c.
        graph.add_edge(prop(a, "Text"), prop(b, "Text")).unwrap();
        graph.add_edge(prop(b, "Text"), prop(c, "Text")).unwrap();

        let detached = graph.detach_object(b);
        // Only a's property needs its flags cleared; b itself is going away.
        assert_eq!(detached, vec![prop(a, "Text")]);
        assert!(graph.is_empty());
    }
}
