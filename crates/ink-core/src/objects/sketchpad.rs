//! Freehand sketchpad object.

use crate::color::{color_or_transparent, Rgba};
use crate::property::{Property, PropertyKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A single freehand stroke (sequence of sampled points).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Derived presentation state of a sketchpad, plus its freehand strokes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchpadState {
    strokes: Vec<Stroke>,
    pub stroke_color: Rgba,
    pub thickness: f64,
    pub background: Rgba,
}

impl SketchpadState {
    /// Named actions exposed in the UI, each taking an optional free-form
    /// string argument.
    pub const ACTIONS: &'static [&'static str] = &["Clear", "Undo"];

    pub(crate) fn schema() -> Vec<Property> {
        vec![
            Property::new("Stroke", PropertyKind::Input, "000,000,000"),
            Property::new("StrokeThickness", PropertyKind::Input, "2"),
            Property::new("Background", PropertyKind::Input, "255,255,255"),
        ]
    }

    pub(crate) fn apply(&mut self, name: &str, value: &str) {
        match name {
            "Stroke" => self.stroke_color = color_or_transparent(value),
            "StrokeThickness" => {
                if let Ok(thickness) = value.parse::<f64>() {
                    if thickness >= 0.0 {
                        self.thickness = thickness;
                    }
                }
            }
            "Background" => self.background = color_or_transparent(value),
            _ => {}
        }
    }

    /// Invoke a named action. Unknown actions return `false`.
    ///
    /// `Clear` removes all strokes. `Undo` removes the most recent N strokes,
    /// where N is parsed from the argument (default 1); it is a no-op when N
    /// exceeds the current stroke count.
    pub fn invoke(&mut self, action: &str, argument: Option<&str>) -> bool {
        match action {
            "Clear" => {
                self.strokes.clear();
                true
            }
            "Undo" => {
                let count = argument
                    .and_then(|arg| arg.trim().parse::<usize>().ok())
                    .unwrap_or(1);
                if count <= self.strokes.len() {
                    self.strokes.truncate(self.strokes.len() - count);
                }
                true
            }
            other => {
                log::debug!("sketchpad: ignoring unknown action {other:?}");
                false
            }
        }
    }

    /// Start a new stroke.
    pub fn begin_stroke(&mut self) {
        self.strokes.push(Stroke::default());
    }

    /// Append a point to the stroke in progress; starts one if none exists.
    pub fn add_point(&mut self, point: Point) {
        if self.strokes.is_empty() {
            self.begin_stroke();
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.points.push(point);
        }
    }

    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }
}

impl Default for SketchpadState {
    fn default() -> Self {
        Self {
            strokes: Vec::new(),
            stroke_color: Rgba::black(),
            thickness: 2.0,
            background: Rgba::white(),
        }
    }
}
