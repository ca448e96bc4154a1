//! Image box object.

use crate::property::{Property, PropertyKind};
use serde::{Deserialize, Serialize};

/// How the image is scaled inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stretch {
    /// Natural size, no scaling.
    None,
    /// Fill the box, ignoring aspect ratio.
    Fill,
    /// Fit inside the box, preserving aspect ratio.
    #[default]
    Uniform,
}

impl Stretch {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "None" => Some(Stretch::None),
            "Fill" => Some(Stretch::Fill),
            "Uniform" => Some(Stretch::Uniform),
            _ => None,
        }
    }
}

/// Derived presentation state of an image box.
///
/// Loading and decoding the image is the front end's concern; when a load
/// fails it reports the error to the user and writes an empty `ImagePath`
/// back through the document, reverting the property.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageBoxState {
    /// Path or URI of the displayed image; empty means no image.
    pub path: String,
    pub stretch: Stretch,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
}

impl ImageBoxState {
    pub(crate) fn schema() -> Vec<Property> {
        vec![
            Property::new("ImagePath", PropertyKind::Input, ""),
            Property::with_values("Stretch", "Uniform", &["None", "Fill", "Uniform"]),
            Property::new("Opacity", PropertyKind::Input, "1"),
        ]
    }

    pub(crate) fn apply(&mut self, name: &str, value: &str) {
        match name {
            "ImagePath" => self.path = value.to_string(),
            "Stretch" => {
                if let Some(stretch) = Stretch::parse(value) {
                    self.stretch = stretch;
                }
            }
            "Opacity" => {
                if let Ok(opacity) = value.parse::<f64>() {
                    if (0.0..=1.0).contains(&opacity) {
                        self.opacity = opacity;
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_schema() {
        let mut state = ImageBoxState::default();
        for property in ImageBoxState::schema() {
            state.apply(property.name(), property.value());
        }
        assert!(state.path.is_empty());
        assert_eq!(state.stretch, Stretch::Uniform);
        assert!((state.opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_opacity_out_of_range_ignored() {
        let mut state = ImageBoxState::default();
        state.apply("Opacity", "1");
        state.apply("Opacity", "2.5");
        assert!((state.opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clearing_path_reverts_image() {
        let mut state = ImageBoxState::default();
        state.apply("ImagePath", "/tmp/cat.png");
        state.apply("ImagePath", "");
        assert!(state.path.is_empty());
    }
}
