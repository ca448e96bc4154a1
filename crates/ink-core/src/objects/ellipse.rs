//! Ellipse object.

use crate::color::{color_or_transparent, Rgba};
use crate::property::{Property, PropertyKind};
use serde::{Deserialize, Serialize};

/// Derived presentation state of an ellipse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EllipseState {
    pub fill: Rgba,
    pub stroke: Rgba,
    pub thickness: f64,
}

impl EllipseState {
    pub(crate) fn schema() -> Vec<Property> {
        vec![
            Property::new("Fill", PropertyKind::Input, ""),
            Property::new("Stroke", PropertyKind::Input, "000,000,000"),
            Property::new("StrokeThickness", PropertyKind::Input, "2"),
        ]
    }

    pub(crate) fn apply(&mut self, name: &str, value: &str) {
        match name {
            "Fill" => self.fill = color_or_transparent(value),
            "Stroke" => self.stroke = color_or_transparent(value),
            "StrokeThickness" => {
                if let Ok(thickness) = value.parse::<f64>() {
                    if thickness >= 0.0 {
                        self.thickness = thickness;
                    }
                }
            }
            _ => {}
        }
    }
}

impl Default for EllipseState {
    fn default() -> Self {
        Self {
            fill: Rgba::TRANSPARENT,
            stroke: Rgba::black(),
            thickness: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_defaults_transparent() {
        let mut state = EllipseState::default();
        for property in EllipseState::schema() {
            state.apply(property.name(), property.value());
        }
        assert!(state.fill.is_transparent());
        assert_eq!(state.stroke, Rgba::black());
    }

    #[test]
    fn test_fill_color_applies() {
        let mut state = EllipseState::default();
        state.apply("Fill", "000,128,255");
        assert_eq!(state.fill, Rgba::opaque(0, 128, 255));
    }
}
