//! Rectangle object.

use crate::color::{color_or_transparent, Rgba};
use crate::property::{Property, PropertyKind};
use serde::{Deserialize, Serialize};

/// Derived presentation state of a rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangleState {
    pub fill: Rgba,
    pub stroke: Rgba,
    pub thickness: f64,
    pub corner_radius: f64,
}

impl RectangleState {
    pub(crate) fn schema() -> Vec<Property> {
        vec![
            Property::new("Fill", PropertyKind::Input, ""),
            Property::new("Stroke", PropertyKind::Input, "000,000,000"),
            Property::new("StrokeThickness", PropertyKind::Input, "2"),
            Property::new("CornerRadius", PropertyKind::Input, "0"),
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
            "CornerRadius" => {
                if let Ok(radius) = value.parse::<f64>() {
                    if radius >= 0.0 {
                        self.corner_radius = radius;
                    }
                }
            }
            _ => {}
        }
    }
}

impl Default for RectangleState {
    fn default() -> Self {
        Self {
            fill: Rgba::TRANSPARENT,
            stroke: Rgba::black(),
            thickness: 2.0,
            corner_radius: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_radius_parses() {
        let mut state = RectangleState::default();
        state.apply("CornerRadius", "8");
        assert!((state.corner_radius - 8.0).abs() < f64::EPSILON);
        state.apply("CornerRadius", "round");
        assert!((state.corner_radius - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stroke_color_applies() {
        let mut state = RectangleState::default();
        state.apply("Stroke", "010,020,030");
        assert_eq!(state.stroke, Rgba::opaque(10, 20, 30));
    }
}
