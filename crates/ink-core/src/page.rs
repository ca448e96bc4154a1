//! Page container.

use crate::color::Rgba;
use crate::objects::{InkObject, ObjectId};
use serde::{Deserialize, Serialize};

/// What a page is painted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageBackground {
    Color(Rgba),
    /// Path or URI of a background image. Loading it is the front end's job;
    /// an unloadable image is reported to the user and the background reset.
    Image(String),
}

impl Default for PageBackground {
    fn default() -> Self {
        PageBackground::Color(Rgba::white())
    }
}

/// An ordered collection of drawable objects with page-level attributes.
///
/// Insertion order is display and selection order. Objects are exclusively
/// owned by their page; removal must go through
/// [`Document::remove_object`](crate::Document::remove_object) so that
/// synchronization edges referencing the object are torn down first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub name: String,
    pub background: PageBackground,
    objects: Vec<InkObject>,
}

impl Page {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: PageBackground::default(),
            objects: Vec::new(),
        }
    }

    /// Append an object; it becomes the last in display order.
    pub fn push_object(&mut self, object: InkObject) {
        self.objects.push(object);
    }

    pub fn object(&self, id: ObjectId) -> Option<&InkObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut InkObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    pub fn object_by_name(&self, name: &str) -> Option<&InkObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Objects in display order.
    pub fn objects(&self) -> &[InkObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.iter().any(|o| o.id() == id)
    }

    pub(crate) fn take_object(&mut self, id: ObjectId) -> Option<InkObject> {
        let index = self.objects.iter().position(|o| o.id() == id)?;
        Some(self.objects.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::ObjectKind;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut page = Page::new("Page1");
        page.push_object(InkObject::new(ObjectKind::TextBox, "T1"));
        page.push_object(InkObject::new(ObjectKind::Line, "L1"));
        page.push_object(InkObject::new(ObjectKind::TextBox, "T2"));

        let names: Vec<&str> = page.objects().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["T1", "L1", "T2"]);
    }

    #[test]
    fn test_take_object() {
        let mut page = Page::new("Page1");
        let object = InkObject::new(ObjectKind::Ellipse, "E1");
        let id = object.id();
        page.push_object(object);

        let taken = page.take_object(id);
        assert!(taken.is_some());
        assert!(page.is_empty());
        assert!(page.take_object(id).is_none());
    }

    #[test]
    fn test_default_background_is_white() {
        let page = Page::new("Page1");
        assert_eq!(page.background, PageBackground::Color(Rgba::white()));
    }
}
