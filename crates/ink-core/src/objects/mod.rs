//! Drawable object definitions.
//!
//! Every object owns a fixed, per-kind set of string-encoded properties plus
//! positional attributes. Property writes flow through
//! [`set_property_value`](InkObject::set_property_value), which stores the
//! value and lets the kind-specific state re-derive its presentation (parsed
//! colors, font metrics, endpoints). Unknown property names are ignored.

mod ellipse;
mod image;
mod line;
mod rectangle;
mod sketchpad;
mod text;

pub use ellipse::EllipseState;
pub use image::{ImageBoxState, Stretch};
pub use line::LineState;
pub use rectangle::RectangleState;
pub use sketchpad::SketchpadState;
pub use text::{FontWeight, LineDecoration, TextAlignment, TextBoxState};

use crate::property::Property;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Unique identifier for drawable objects.
pub type ObjectId = Uuid;

/// Discriminator over the drawable object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    TextBox,
    ImageBox,
    Line,
    Ellipse,
    Rectangle,
    Sketchpad,
}

impl ObjectKind {
    /// Kind name, also the auto-naming prefix (`TextBox3`, `Line1`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::TextBox => "TextBox",
            ObjectKind::ImageBox => "ImageBox",
            ObjectKind::Line => "Line",
            ObjectKind::Ellipse => "Ellipse",
            ObjectKind::Rectangle => "Rectangle",
            ObjectKind::Sketchpad => "Sketchpad",
        }
    }

    pub fn all() -> &'static [ObjectKind] {
        &[
            ObjectKind::TextBox,
            ObjectKind::ImageBox,
            ObjectKind::Line,
            ObjectKind::Ellipse,
            ObjectKind::Rectangle,
            ObjectKind::Sketchpad,
        ]
    }

    /// The fixed property schema for this kind.
    fn schema(&self) -> Vec<Property> {
        match self {
            ObjectKind::TextBox => TextBoxState::schema(),
            ObjectKind::ImageBox => ImageBoxState::schema(),
            ObjectKind::Line => LineState::schema(),
            ObjectKind::Ellipse => EllipseState::schema(),
            ObjectKind::Rectangle => RectangleState::schema(),
            ObjectKind::Sketchpad => SketchpadState::schema(),
        }
    }
}

/// Kind-specific presentation state, derived from the property map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ObjectState {
    TextBox(TextBoxState),
    ImageBox(ImageBoxState),
    Line(LineState),
    Ellipse(EllipseState),
    Rectangle(RectangleState),
    Sketchpad(SketchpadState),
}

impl ObjectState {
    fn for_kind(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::TextBox => ObjectState::TextBox(TextBoxState::default()),
            ObjectKind::ImageBox => ObjectState::ImageBox(ImageBoxState::default()),
            ObjectKind::Line => ObjectState::Line(LineState::default()),
            ObjectKind::Ellipse => ObjectState::Ellipse(EllipseState::default()),
            ObjectKind::Rectangle => ObjectState::Rectangle(RectangleState::default()),
            ObjectKind::Sketchpad => ObjectState::Sketchpad(SketchpadState::default()),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectState::TextBox(_) => ObjectKind::TextBox,
            ObjectState::ImageBox(_) => ObjectKind::ImageBox,
            ObjectState::Line(_) => ObjectKind::Line,
            ObjectState::Ellipse(_) => ObjectKind::Ellipse,
            ObjectState::Rectangle(_) => ObjectKind::Rectangle,
            ObjectState::Sketchpad(_) => ObjectKind::Sketchpad,
        }
    }

    /// React to a property value change. Names that a kind does not
    /// recognize are ignored.
    fn apply(&mut self, name: &str, value: &str) {
        match self {
            ObjectState::TextBox(s) => s.apply(name, value),
            ObjectState::ImageBox(s) => s.apply(name, value),
            ObjectState::Line(s) => s.apply(name, value),
            ObjectState::Ellipse(s) => s.apply(name, value),
            ObjectState::Rectangle(s) => s.apply(name, value),
            ObjectState::Sketchpad(s) => s.apply(name, value),
        }
    }
}

/// A drawable object on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InkObject {
    pub(crate) id: ObjectId,
    /// User-facing label, unique within the document when auto-generated.
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub visible: bool,
    properties: BTreeMap<String, Property>,
    state: ObjectState,
}

impl InkObject {
    pub const DEFAULT_POSITION: (f64, f64) = (100.0, 100.0);
    pub const DEFAULT_SIZE: (f64, f64) = (160.0, 90.0);

    /// Create an object of the given kind. The property schema is fixed here
    /// and never mutated afterwards.
    pub fn new(kind: ObjectKind, name: impl Into<String>) -> Self {
        let mut state = ObjectState::for_kind(kind);
        let mut properties = BTreeMap::new();
        for property in kind.schema() {
            state.apply(property.name(), property.value());
            properties.insert(property.name().to_string(), property);
        }
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            x: Self::DEFAULT_POSITION.0,
            y: Self::DEFAULT_POSITION.1,
            width: Self::DEFAULT_SIZE.0,
            height: Self::DEFAULT_SIZE.1,
            visible: true,
            properties,
            state,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn kind(&self) -> ObjectKind {
        self.state.kind()
    }

    /// The derived presentation state a renderer would draw from.
    pub fn state(&self) -> &ObjectState {
        &self.state
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Properties in name order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Set a property value and re-derive the presentation state.
    ///
    /// Returns `false` when the name is not part of this kind's schema.
    /// Prefer [`Document::set_property_value`](crate::Document::set_property_value)
    /// so the change also propagates to synchronized dependents.
    pub fn set_property_value(&mut self, name: &str, value: &str) -> bool {
        let Some(property) = self.properties.get_mut(name) else {
            return false;
        };
        property.set_value(value);
        self.state.apply(name, value);
        true
    }

    /// Restore a property to a history entry (0 = most recent) and re-derive
    /// the presentation state. Returns the restored value.
    pub fn restore_property(&mut self, name: &str, index: usize) -> Option<String> {
        let property = self.properties.get_mut(name)?;
        let value = property.restore_value(index)?.to_string();
        self.state.apply(name, &value);
        Some(value)
    }

    /// Named actions this object supports (sketchpads only).
    pub fn actions(&self) -> &'static [&'static str] {
        match &self.state {
            ObjectState::Sketchpad(_) => SketchpadState::ACTIONS,
            _ => &[],
        }
    }

    /// Invoke a named action with an optional free-form argument.
    ///
    /// Returns `false` when this kind has no such action.
    pub fn invoke_action(&mut self, action: &str, argument: Option<&str>) -> bool {
        match &mut self.state {
            ObjectState::Sketchpad(s) => s.invoke(action, argument),
            _ => false,
        }
    }

    /// The sketchpad state, when this object is a sketchpad.
    pub fn as_sketchpad(&self) -> Option<&SketchpadState> {
        match &self.state {
            ObjectState::Sketchpad(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sketchpad_mut(&mut self) -> Option<&mut SketchpadState> {
        match &mut self.state {
            ObjectState::Sketchpad(s) => Some(s),
            _ => None,
        }
    }

    pub(crate) fn property_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.properties.get_mut(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_schema_is_fixed_per_kind() {
        let text_box = InkObject::new(ObjectKind::TextBox, "T1");
        let names: Vec<&str> = text_box.property_names().collect();
        assert!(names.contains(&"Text"));
        assert!(names.contains(&"Foreground"));
        assert!(!names.contains(&"ImagePath"));

        let image_box = InkObject::new(ObjectKind::ImageBox, "I1");
        assert!(image_box.property("ImagePath").is_some());
    }

    #[test]
    fn test_unknown_property_is_rejected() {
        let mut object = InkObject::new(ObjectKind::Ellipse, "E1");
        assert!(!object.set_property_value("FontSize", "12"));
    }

    #[test]
    fn test_state_reacts_to_property_change() {
        let mut object = InkObject::new(ObjectKind::TextBox, "T1");
        object.set_property_value("Foreground", "255,000,000");
        match object.state() {
            ObjectState::TextBox(s) => assert_eq!(s.foreground, Rgba::opaque(255, 0, 0)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_restore_updates_presentation() {
        let mut object = InkObject::new(ObjectKind::TextBox, "T1");
        object.set_property_value("FontSize", "32");
        object.restore_property("FontSize", 1);
        match object.state() {
            ObjectState::TextBox(s) => assert!((s.font_size - 18.0).abs() < f64::EPSILON),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_actions_only_on_sketchpad() {
        let mut text_box = InkObject::new(ObjectKind::TextBox, "T1");
        assert!(text_box.actions().is_empty());
        assert!(!text_box.invoke_action("Clear", None));

        let sketchpad = InkObject::new(ObjectKind::Sketchpad, "S1");
        assert_eq!(sketchpad.actions(), ["Clear", "Undo"]);
    }
}
