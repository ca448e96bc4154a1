//! Text box object.

use crate::color::{color_or_transparent, Rgba};
use crate::property::{Property, PropertyKind};
use serde::{Deserialize, Serialize};

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlignment {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

impl TextAlignment {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "Left" => Some(TextAlignment::Left),
            "Right" => Some(TextAlignment::Right),
            "Center" => Some(TextAlignment::Center),
            "Justify" => Some(TextAlignment::Justify),
            _ => None,
        }
    }
}

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "Light" => Some(FontWeight::Light),
            "Regular" => Some(FontWeight::Regular),
            "Bold" => Some(FontWeight::Bold),
            _ => None,
        }
    }
}

/// Line decoration applied to the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineDecoration {
    #[default]
    NoLine,
    UnderLine,
    OverLine,
    Strikethrough,
}

impl LineDecoration {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "NoLine" => Some(LineDecoration::NoLine),
            "UnderLine" => Some(LineDecoration::UnderLine),
            "OverLine" => Some(LineDecoration::OverLine),
            "Strikethrough" => Some(LineDecoration::Strikethrough),
            _ => None,
        }
    }
}

/// Font families offered in the property panel.
///
/// Enumerating the fonts actually installed is the front end's job; this is
/// the portable fallback list.
pub const FONT_FAMILIES: &[&str] = &[
    "Times New Roman",
    "Arial",
    "Courier New",
    "Georgia",
    "Verdana",
];

/// Derived presentation state of a text box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBoxState {
    pub text: String,
    pub alignment: TextAlignment,
    pub wrapping: bool,
    pub font_size: f64,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub italic: bool,
    pub decoration: LineDecoration,
    pub foreground: Rgba,
    pub background: Rgba,
}

impl Default for TextBoxState {
    fn default() -> Self {
        Self {
            text: String::new(),
            alignment: TextAlignment::default(),
            wrapping: true,
            font_size: 18.0,
            font_family: FONT_FAMILIES[0].to_string(),
            font_weight: FontWeight::default(),
            italic: false,
            decoration: LineDecoration::default(),
            foreground: Rgba::black(),
            background: Rgba::TRANSPARENT,
        }
    }
}

impl TextBoxState {
    pub(crate) fn schema() -> Vec<Property> {
        vec![
            Property::new("Text", PropertyKind::Input, "Text here"),
            Property::with_values("Alignment", "Left", &["Left", "Right", "Center", "Justify"]),
            Property::new("TextWrapping", PropertyKind::Boolean, "True"),
            Property::new("FontSize", PropertyKind::Input, "18"),
            Property::with_values("FontFamily", FONT_FAMILIES[0], FONT_FAMILIES),
            Property::with_values("FontWeight", "Regular", &["Light", "Regular", "Bold"]),
            Property::new("Italic", PropertyKind::Boolean, "False"),
            Property::with_values(
                "Lines",
                "NoLine",
                &["NoLine", "UnderLine", "OverLine", "Strikethrough"],
            ),
            Property::new("Foreground", PropertyKind::Input, "000,000,000"),
            Property::new("Background", PropertyKind::Input, ""),
        ]
    }

    pub(crate) fn apply(&mut self, name: &str, value: &str) {
        match name {
            "Text" => self.text = value.to_string(),
            "Alignment" => {
                if let Some(alignment) = TextAlignment::parse(value) {
                    self.alignment = alignment;
                }
            }
            "TextWrapping" => self.wrapping = parse_bool(value, self.wrapping),
            "FontSize" => {
                // Unparsable sizes keep the previous rendered value.
                if let Ok(size) = value.parse::<f64>() {
                    self.font_size = size;
                }
            }
            "FontFamily" => {
                if !value.is_empty() {
                    self.font_family = value.to_string();
                }
            }
            "FontWeight" => {
                if let Some(weight) = FontWeight::parse(value) {
                    self.font_weight = weight;
                }
            }
            "Italic" => self.italic = parse_bool(value, self.italic),
            "Lines" => {
                if let Some(decoration) = LineDecoration::parse(value) {
                    self.decoration = decoration;
                }
            }
            "Foreground" => self.foreground = color_or_transparent(value),
            "Background" => self.background = color_or_transparent(value),
            _ => {}
        }
    }
}

/// Boolean properties are stored as `"True"`/`"False"`; anything else keeps
/// the previous state.
pub(crate) fn parse_bool(value: &str, previous: bool) -> bool {
    if value.eq_ignore_ascii_case("true") {
        true
    } else if value.eq_ignore_ascii_case("false") {
        false
    } else {
        previous
    }
}
