//! Document: the top-level editing session.
//!
//! The document owns the ordered page list, the naming service and the
//! synchronization graph, and is the single entry point for every operation
//! whose effect crosses object boundaries: setting a property value (which
//! propagates through the graph), establishing or tearing down
//! synchronization, and removing objects or pages (which must detach graph
//! edges first so no dangling source reference survives).
//!
//! Everything here runs on the UI thread; propagation is a plain synchronous
//! walk that terminates because the graph is kept acyclic at edge insertion.

use crate::naming::NameRegistry;
use crate::objects::{InkObject, ObjectId, ObjectKind};
use crate::page::{Page, PageBackground};
use crate::sync::{PropertyRef, SyncError, SyncGraph};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use thiserror::Error;

/// Structural document errors.
///
/// Parse failures inside property values are not errors; they resolve to
/// fallbacks in the owning object. These variants cover operations the UI
/// guards with enabled/disabled state or a modal message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("the last page cannot be removed")]
    LastPage,
    #[error("page index {0} is out of range")]
    PageNotFound(usize),
    #[error("object not found in document")]
    ObjectNotFound,
    #[error("property {0:?} not found on object")]
    PropertyNotFound(String),
}

/// A whiteboard document: ordered pages, auto-naming and the property
/// synchronization graph.
///
/// A document always contains at least one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pages: Vec<Page>,
    names: NameRegistry,
    sync: SyncGraph,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with a single empty `Page1`.
    pub fn new() -> Self {
        let mut names = NameRegistry::new();
        let first = Page::new(names.next("Page"));
        Self {
            pages: vec![first],
            names,
            sync: SyncGraph::new(),
        }
    }

    // ----- pages -----

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append a new auto-named page and return its index.
    pub fn add_page(&mut self) -> usize {
        let page = Page::new(self.names.next("Page"));
        log::debug!("adding page {:?}", page.name);
        self.pages.push(page);
        self.pages.len() - 1
    }

    /// Remove a page and everything on it.
    ///
    /// Fails when it is the only page. Synchronization edges touching any of
    /// the page's objects are torn down first.
    pub fn remove_page(&mut self, index: usize) -> Result<Page, DocumentError> {
        if index >= self.pages.len() {
            return Err(DocumentError::PageNotFound(index));
        }
        if self.pages.len() == 1 {
            return Err(DocumentError::LastPage);
        }
        let ids: Vec<ObjectId> = self.pages[index].objects().iter().map(|o| o.id()).collect();
        for id in ids {
            self.detach_from_graph(id);
        }
        let page = self.pages.remove(index);
        log::debug!("removed page {:?}", page.name);
        Ok(page)
    }

    pub fn rename_page(&mut self, index: usize, name: &str) -> Result<(), DocumentError> {
        let page = self
            .pages
            .get_mut(index)
            .ok_or(DocumentError::PageNotFound(index))?;
        page.name = name.to_string();
        Ok(())
    }

    pub fn set_background(
        &mut self,
        index: usize,
        background: PageBackground,
    ) -> Result<(), DocumentError> {
        let page = self
            .pages
            .get_mut(index)
            .ok_or(DocumentError::PageNotFound(index))?;
        page.background = background;
        Ok(())
    }

    // ----- objects -----

    /// Create an auto-named object of the given kind on a page and return
    /// its id.
    pub fn add_object(&mut self, page: usize, kind: ObjectKind) -> Result<ObjectId, DocumentError> {
        if page >= self.pages.len() {
            return Err(DocumentError::PageNotFound(page));
        }
        let object = InkObject::new(kind, self.names.next(kind.name()));
        let id = object.id();
        log::debug!("adding {:?} {:?} to page {:?}", kind, object.name, self.pages[page].name);
        self.pages[page].push_object(object);
        Ok(id)
    }

    pub fn object(&self, id: ObjectId) -> Option<&InkObject> {
        self.pages.iter().find_map(|p| p.object(id))
    }

    /// Locate an object together with the index of its owning page.
    pub fn find_object(&self, id: ObjectId) -> Option<(usize, &InkObject)> {
        self.pages
            .iter()
            .enumerate()
            .find_map(|(index, page)| page.object(id).map(|o| (index, o)))
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut InkObject> {
        self.pages.iter_mut().find_map(|p| p.object_mut(id))
    }

    /// Remove an object from the document.
    ///
    /// Every property anywhere in the document whose source is this object is
    /// desynchronized before the object leaves its page, so no dangling
    /// source reference can survive the removal.
    pub fn remove_object(&mut self, id: ObjectId) -> Result<InkObject, DocumentError> {
        let page = self
            .pages
            .iter()
            .position(|p| p.contains(id))
            .ok_or(DocumentError::ObjectNotFound)?;
        self.detach_from_graph(id);
        let object = self.pages[page]
            .take_object(id)
            .ok_or(DocumentError::ObjectNotFound)?;
        log::debug!("removed {:?} from page {:?}", object.name, self.pages[page].name);
        Ok(object)
    }

    /// Remove every object of one kind from a page. Returns how many were
    /// removed.
    pub fn remove_all_of_kind(
        &mut self,
        page: usize,
        kind: ObjectKind,
    ) -> Result<usize, DocumentError> {
        let ids: Vec<ObjectId> = self
            .pages
            .get(page)
            .ok_or(DocumentError::PageNotFound(page))?
            .objects()
            .iter()
            .filter(|o| o.kind() == kind)
            .map(|o| o.id())
            .collect();
        for &id in &ids {
            self.remove_object(id)?;
        }
        Ok(ids.len())
    }

    /// Remove every object from a page. Returns how many were removed.
    pub fn clear_page(&mut self, page: usize) -> Result<usize, DocumentError> {
        let ids: Vec<ObjectId> = self
            .pages
            .get(page)
            .ok_or(DocumentError::PageNotFound(page))?
            .objects()
            .iter()
            .map(|o| o.id())
            .collect();
        for &id in &ids {
            self.remove_object(id)?;
        }
        Ok(ids.len())
    }

    // ----- property values -----

    /// Set a property value and propagate it to all synchronized dependents.
    ///
    /// Propagation is synchronous: every transitive dependent is updated
    /// before this returns. The graph is acyclic by construction; a visited
    /// set additionally bounds the walk.
    pub fn set_property_value(
        &mut self,
        object: ObjectId,
        name: &str,
        value: &str,
    ) -> Result<(), DocumentError> {
        let target = self.object_mut(object).ok_or(DocumentError::ObjectNotFound)?;
        if !target.set_property_value(name, value) {
            return Err(DocumentError::PropertyNotFound(name.to_string()));
        }
        self.propagate(&PropertyRef::new(object, name), value);
        Ok(())
    }

    /// Restore a property to a history entry (0 = most recent) and propagate
    /// the restored value. Returns `Ok(None)` for an out-of-bounds index.
    pub fn restore_property(
        &mut self,
        object: ObjectId,
        name: &str,
        index: usize,
    ) -> Result<Option<String>, DocumentError> {
        let target = self.object_mut(object).ok_or(DocumentError::ObjectNotFound)?;
        if target.property(name).is_none() {
            return Err(DocumentError::PropertyNotFound(name.to_string()));
        }
        let Some(value) = target.restore_property(name, index) else {
            return Ok(None);
        };
        self.propagate(&PropertyRef::new(object, name), &value);
        Ok(Some(value))
    }

    /// Invoke a named action on an object (sketchpad `Clear`/`Undo`).
    pub fn invoke_action(
        &mut self,
        object: ObjectId,
        action: &str,
        argument: Option<&str>,
    ) -> Result<bool, DocumentError> {
        let target = self.object_mut(object).ok_or(DocumentError::ObjectNotFound)?;
        Ok(target.invoke_action(action, argument))
    }

    /// Push a value to all transitive dependents of `origin`. Dependents
    /// whose object disappeared mid-walk are skipped.
    fn propagate(&mut self, origin: &PropertyRef, value: &str) {
        let mut visited: HashSet<PropertyRef> = HashSet::from([origin.clone()]);
        let mut queue: VecDeque<PropertyRef> = self.sync.dependents_of(origin).into();
        while let Some(target) = queue.pop_front() {
            if !visited.insert(target.clone()) {
                continue;
            }
            if let Some(object) = self.object_mut(target.object) {
                object.set_property_value(&target.property, value);
            }
            queue.extend(self.sync.dependents_of(&target));
        }
    }

    // ----- synchronization -----

    /// Synchronize `dependent` to `source`: subscribe, copy the source's
    /// current value immediately, and record the source on the dependent.
    ///
    /// Rejected (and the dependent left untouched) when either end is
    /// missing, the property kinds differ, or the edge would close a cycle.
    pub fn sync_property(
        &mut self,
        dependent: PropertyRef,
        source: PropertyRef,
    ) -> Result<(), SyncError> {
        let (source_kind, source_value) = {
            let object = self.object(source.object).ok_or(SyncError::ObjectNotFound)?;
            let property = object
                .property(&source.property)
                .ok_or_else(|| SyncError::PropertyNotFound(source.property.clone()))?;
            (property.kind(), property.value().to_string())
        };
        let dependent_kind = {
            let object = self
                .object(dependent.object)
                .ok_or(SyncError::ObjectNotFound)?;
            let property = object
                .property(&dependent.property)
                .ok_or_else(|| SyncError::PropertyNotFound(dependent.property.clone()))?;
            property.kind()
        };
        if source_kind != dependent_kind {
            log::debug!("sync rejected: {dependent} and {source} have different kinds");
            return Err(SyncError::KindMismatch);
        }
        self.sync.add_edge(dependent.clone(), source.clone())?;

        // Subscription established; adopt the source's current value.
        if let Some(object) = self.object_mut(dependent.object) {
            object.set_property_value(&dependent.property, &source_value);
            if let Some(property) = object.property_mut(&dependent.property) {
                property.set_sync_source(Some(source.clone()));
            }
        }
        self.propagate(&dependent, &source_value);
        log::debug!("synchronized {dependent} with {source}");
        Ok(())
    }

    /// Tear down the dependent's subscription. Idempotent; returns whether an
    /// edge existed.
    ///
    /// Desynchronizing an intermediate property of a chain leaves the other
    /// edges intact: edges are independent and are not transitively
    /// re-validated.
    pub fn desync_property(&mut self, dependent: &PropertyRef) -> bool {
        let removed = self.sync.remove_edge(dependent);
        if let Some(object) = self.object_mut(dependent.object) {
            if let Some(property) = object.property_mut(&dependent.property) {
                property.set_sync_source(None);
            }
        }
        if removed {
            log::debug!("desynchronized {dependent}");
        }
        removed
    }

    /// Objects the given object's properties may synchronize with: every
    /// other object of the same kind, anywhere in the document.
    pub fn sync_candidates(&self, object: ObjectId) -> Vec<ObjectId> {
        let Some(kind) = self.object(object).map(|o| o.kind()) else {
            return Vec::new();
        };
        self.pages
            .iter()
            .flat_map(|p| p.objects())
            .filter(|o| o.kind() == kind && o.id() != object)
            .map(|o| o.id())
            .collect()
    }

    /// The synchronization graph, for inspection.
    pub fn sync_graph(&self) -> &SyncGraph {
        &self.sync
    }

    /// Desynchronize a property and set it back to its default value.
    pub fn reset_property(&mut self, target: &PropertyRef) -> Result<(), DocumentError> {
        self.desync_property(target);
        let default = {
            let object = self
                .object(target.object)
                .ok_or(DocumentError::ObjectNotFound)?;
            let property = object
                .property(&target.property)
                .ok_or_else(|| DocumentError::PropertyNotFound(target.property.clone()))?;
            property.default_value().to_string()
        };
        self.set_property_value(target.object, &target.property, &default)
    }

    /// Drop a property's value history. The current value is kept; restores
    /// are no-ops until new values are set.
    pub fn clear_property_history(&mut self, target: &PropertyRef) -> Result<(), DocumentError> {
        let object = self
            .object_mut(target.object)
            .ok_or(DocumentError::ObjectNotFound)?;
        let property = object
            .property_mut(&target.property)
            .ok_or_else(|| DocumentError::PropertyNotFound(target.property.clone()))?;
        property.clear_history();
        Ok(())
    }

    /// Reset every property of an object (see [`reset_property`](Self::reset_property)).
    pub fn reset_all_properties(&mut self, object: ObjectId) -> Result<(), DocumentError> {
        let names: Vec<String> = self
            .object(object)
            .ok_or(DocumentError::ObjectNotFound)?
            .property_names()
            .map(str::to_string)
            .collect();
        for name in names {
            self.reset_property(&PropertyRef::new(object, name))?;
        }
        Ok(())
    }

    /// Remove every graph edge touching the object and clear the sync flags
    /// of dependents that lost their source.
    fn detach_from_graph(&mut self, id: ObjectId) {
        let detached = self.sync.detach_object(id);
        for dependent in detached {
            log::debug!("desynchronizing {dependent}: its source object is being removed");
            if let Some(object) = self.object_mut(dependent.object) {
                if let Some(property) = object.property_mut(&dependent.property) {
                    property.set_sync_source(None);
                }
            }
        }
    }

    // ----- serialization -----

    /// Serialize the document to JSON, including the sync graph.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
