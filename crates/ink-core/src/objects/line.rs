//! Line object.

use crate::color::{color_or_transparent, parse_point, Rgba};
use crate::property::{Property, PropertyKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Derived presentation state of a line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineState {
    pub start: Point,
    pub end: Point,
    pub stroke: Rgba,
    pub thickness: f64,
}

impl LineState {
    /// Fallback endpoints for malformed coordinate strings.
    pub const DEFAULT_START: Point = Point::new(0.0, 0.0);
    pub const DEFAULT_END: Point = Point::new(100.0, 100.0);

    pub(crate) fn schema() -> Vec<Property> {
        vec![
            Property::new("StartPoint", PropertyKind::Input, "0,0"),
            Property::new("EndPoint", PropertyKind::Input, "100,100"),
            Property::new("Stroke", PropertyKind::Input, "000,000,000"),
            Property::new("StrokeThickness", PropertyKind::Input, "2"),
        ]
    }

    pub(crate) fn apply(&mut self, name: &str, value: &str) {
        match name {
            "StartPoint" => self.start = parse_point(value, Self::DEFAULT_START),
            "EndPoint" => self.end = parse_point(value, Self::DEFAULT_END),
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

impl Default for LineState {
    fn default() -> Self {
        Self {
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
            stroke: Rgba::black(),
            thickness: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_parsing() {
        let mut state = LineState::default();
        state.apply("StartPoint", "10,20");
        state.apply("EndPoint", "30.5,40.5");
        assert_eq!(state.start, Point::new(10.0, 20.0));
        assert_eq!(state.end, Point::new(30.5, 40.5));
    }

    #[test]
    fn test_malformed_endpoint_falls_back() {
        let mut state = LineState::default();
        state.apply("StartPoint", "10,20");
        state.apply("StartPoint", "not-a-point");
        assert_eq!(state.start, LineState::DEFAULT_START);
    }

    #[test]
    fn test_negative_thickness_ignored() {
        let mut state = LineState::default();
        state.apply("StrokeThickness", "-3");
        assert!((state.thickness - 2.0).abs() < f64::EPSILON);
    }
}
