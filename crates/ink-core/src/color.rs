//! Color and coordinate string encodings.
//!
//! Color-valued properties carry a free-form `"R,G,B"` string; line endpoint
//! properties carry `"X,Y"`. Both encodings recover from malformed input with
//! a safe fallback instead of failing the operation.

use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent, the fallback for malformed color strings.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::opaque(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::opaque(255, 255, 255)
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Parse the internal `"R,G,B"` color encoding.
///
/// Splits on commas and parses each component as a decimal `u8`. Returns
/// `None` on any failure; an out-of-range component such as `"999"` is a
/// parse failure, never a clamp.
pub fn parse_rgb(s: &str) -> Option<Rgba> {
    let mut parts = s.split(',');
    let r = parts.next()?.trim().parse::<u8>().ok()?;
    let g = parts.next()?.trim().parse::<u8>().ok()?;
    let b = parts.next()?.trim().parse::<u8>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgba::opaque(r, g, b))
}

/// Resolve a color-valued property string.
///
/// Empty or malformed input renders fully transparent.
pub fn color_or_transparent(s: &str) -> Rgba {
    parse_rgb(s).unwrap_or(Rgba::TRANSPARENT)
}

/// Parse the `"X,Y"` coordinate encoding used by line endpoints.
///
/// Malformed input falls back to the provided default pair.
pub fn parse_point(s: &str, default: Point) -> Point {
    let mut parts = s.split(',');
    let parsed = (|| {
        let x = parts.next()?.trim().parse::<f64>().ok()?;
        let y = parts.next()?.trim().parse::<f64>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Point::new(x, y))
    })();
    parsed.unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("255,000,128"), Some(Rgba::opaque(255, 0, 128)));
        assert_eq!(parse_rgb("0, 10, 20"), Some(Rgba::opaque(0, 10, 20)));
    }

    #[test]
    fn test_parse_rgb_rejects_out_of_range() {
        assert_eq!(parse_rgb("999,000,000"), None);
        assert_eq!(parse_rgb("-1,0,0"), None);
    }

    #[test]
    fn test_parse_rgb_rejects_malformed() {
        assert_eq!(parse_rgb(""), None);
        assert_eq!(parse_rgb("1,2"), None);
        assert_eq!(parse_rgb("1,2,3,4"), None);
        assert_eq!(parse_rgb("red,green,blue"), None);
    }

    #[test]
    fn test_color_or_transparent_fallback() {
        assert!(color_or_transparent("").is_transparent());
        assert!(color_or_transparent("999,000,000").is_transparent());
        assert_eq!(color_or_transparent("000,000,000"), Rgba::black());
    }

    #[test]
    fn test_parse_point() {
        let fallback = Point::new(10.0, 20.0);
        assert_eq!(parse_point("1.5,-2", fallback), Point::new(1.5, -2.0));
        assert_eq!(parse_point("garbage", fallback), fallback);
        assert_eq!(parse_point("1,2,3", fallback), fallback);
    }

    #[test]
    fn test_peniko_conversion() {
        let color: Color = Rgba::opaque(12, 34, 56).into();
        let back: Rgba = color.into();
        assert_eq!(back, Rgba::opaque(12, 34, 56));
    }
}
