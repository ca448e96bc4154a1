//! The RGB color dialog model.
//!
//! The dialog holds three byte channels edited as text fields, with a live
//! preview of the mixed color. In `Pick` mode confirming yields the chosen
//! color for the caller's property panel; in `Visualize` mode the channels are
//! preloaded from an existing color and locked, and the dialog only mirrors
//! and copies it. The clipboard format is the same `"RRR,GGG,BBB"`
//! zero-padded encoding the property layer uses for color values.

use crate::clipboard::{Clipboard, ClipboardError};
use ink_core::Rgba;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Matches the first `RRR,GGG,BBB` triple anywhere in pasted text. Exactly
/// three digits per channel; whitespace is allowed around the commas.
fn triple_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d{3})\s*,\s*(\d{3})\s*,\s*(\d{3})").unwrap())
}

#[derive(Debug, Error)]
pub enum PasteError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    /// The clipboard text held no `RRR,GGG,BBB` triple with all channels in
    /// byte range.
    #[error("clipboard text does not contain an RGB color")]
    NoColor,
    /// The dialog is in `Visualize` mode; its channels cannot be overwritten.
    #[error("the dialog is read-only")]
    ReadOnly,
}

/// How the dialog was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// Choose a color; confirming returns it.
    Pick,
    /// Inspect an existing color; channels are read-only.
    Visualize,
}

/// Outcome of closing the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Ok(Rgba),
    Cancelled,
}

/// State of one color dialog session.
#[derive(Debug, Clone)]
pub struct ColorDialog {
    mode: DialogMode,
    r: u8,
    g: u8,
    b: u8,
}

impl ColorDialog {
    /// Open in `Pick` mode. All channels start at 255 (white).
    pub fn new() -> Self {
        Self {
            mode: DialogMode::Pick,
            r: 255,
            g: 255,
            b: 255,
        }
    }

    /// Open in `Visualize` mode, preloaded with the color to inspect.
    pub fn visualize(color: Rgba) -> Self {
        Self {
            mode: DialogMode::Visualize,
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }

    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    /// Whether the channel fields accept edits.
    pub fn editable(&self) -> bool {
        self.mode == DialogMode::Pick
    }

    /// The color currently mixed from the three channels, shown as the
    /// preview swatch.
    pub fn color(&self) -> Rgba {
        Rgba::opaque(self.r, self.g, self.b)
    }

    pub fn channels(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The zero-padded `"RRR,GGG,BBB"` encoding of the current color.
    pub fn rgb_string(&self) -> String {
        format!("{:03},{:03},{:03}", self.r, self.g, self.b)
    }

    /// Apply a text edit to the red channel. Returns `false` (and keeps the
    /// previous value) when the text is not a byte or the dialog is
    /// read-only.
    pub fn set_red(&mut self, text: &str) -> bool {
        Self::parse_channel(self.editable(), text)
            .map(|v| self.r = v)
            .is_some()
    }

    pub fn set_green(&mut self, text: &str) -> bool {
        Self::parse_channel(self.editable(), text)
            .map(|v| self.g = v)
            .is_some()
    }

    pub fn set_blue(&mut self, text: &str) -> bool {
        Self::parse_channel(self.editable(), text)
            .map(|v| self.b = v)
            .is_some()
    }

    fn parse_channel(editable: bool, text: &str) -> Option<u8> {
        if !editable {
            return None;
        }
        text.trim().parse::<u8>().ok()
    }

    /// Write the current color to the clipboard in `"RRR,GGG,BBB"` form.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        let text = self.rgb_string();
        clipboard.set_text(&text)?;
        log::debug!("copied {text} to the clipboard");
        Ok(())
    }

    /// Load the channels from the first RGB triple found in the clipboard
    /// text.
    ///
    /// A triple with any channel above 255 does not count as a color; the
    /// channels stay as they were and the caller informs the user.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> Result<(), PasteError> {
        if !self.editable() {
            return Err(PasteError::ReadOnly);
        }
        let text = clipboard.get_text()?;
        let (r, g, b) = parse_rgb_triple(&text).ok_or(PasteError::NoColor)?;
        (self.r, self.g, self.b) = (r, g, b);
        Ok(())
    }

    /// Close the dialog. `Pick` mode yields the chosen color when accepted;
    /// `Visualize` mode always cancels.
    pub fn close(&self, accepted: bool) -> DialogResult {
        if accepted && self.mode == DialogMode::Pick {
            DialogResult::Ok(self.color())
        } else {
            DialogResult::Cancelled
        }
    }
}

impl Default for ColorDialog {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the first three-digit RGB triple in `text` whose channels all fit in
/// a byte.
fn parse_rgb_triple(text: &str) -> Option<(u8, u8, u8)> {
    let captures = triple_pattern().captures(text.trim())?;
    let channel = |i: usize| captures[i].parse::<u8>().ok();
    Some((channel(1)?, channel(2)?, channel(3)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    #[test]
    fn test_defaults_to_white() {
        let dialog = ColorDialog::new();
        assert_eq!(dialog.channels(), (255, 255, 255));
        assert_eq!(dialog.color(), Rgba::opaque(255, 255, 255));
        assert!(dialog.editable());
    }

    #[test]
    fn test_channel_edit_rejects_non_bytes() {
        let mut dialog = ColorDialog::new();
        assert!(dialog.set_red("0"));
        assert!(!dialog.set_red("256"));
        assert!(!dialog.set_red("-1"));
        assert!(!dialog.set_red("red"));
        assert_eq!(dialog.channels().0, 0);
    }

    #[test]
    fn test_rgb_string_is_zero_padded() {
        let mut dialog = ColorDialog::new();
        dialog.set_red("255");
        dialog.set_green("0");
        dialog.set_blue("8");
        assert_eq!(dialog.rgb_string(), "255,000,008");
    }

    #[test]
    fn test_clipboard_round_trip() {
        let mut clipboard = MemoryClipboard::new();
        let mut source = ColorDialog::new();
        source.set_red("255");
        source.set_green("0");
        source.set_blue("8");
        source.copy(&mut clipboard).unwrap();

        let mut target = ColorDialog::new();
        target.paste(&mut clipboard).unwrap();
        assert_eq!(target.channels(), (255, 0, 8));
    }

    #[test]
    fn test_copy_writes_padded_triple() {
        let mut clipboard = MemoryClipboard::new();
        let mut dialog = ColorDialog::new();
        dialog.set_green("0");
        dialog.set_blue("0");
        dialog.copy(&mut clipboard).unwrap();
        assert_eq!(clipboard.get_text().unwrap(), "255,000,000");
    }

    #[test]
    fn test_paste_accepts_surrounding_text() {
        let mut clipboard = MemoryClipboard::with_text("the color was 010,020,030 yesterday");
        let mut dialog = ColorDialog::new();
        dialog.paste(&mut clipboard).unwrap();
        assert_eq!(dialog.channels(), (10, 20, 30));
    }

    #[test]
    fn test_paste_allows_spaces_around_commas() {
        let mut clipboard = MemoryClipboard::with_text("100 , 200 , 050");
        let mut dialog = ColorDialog::new();
        dialog.paste(&mut clipboard).unwrap();
        assert_eq!(dialog.channels(), (100, 200, 50));
    }

    #[test]
    fn test_paste_rejects_out_of_range_channels() {
        let mut clipboard = MemoryClipboard::with_text("999,000,000");
        let mut dialog = ColorDialog::new();
        let err = dialog.paste(&mut clipboard).unwrap_err();
        assert!(matches!(err, PasteError::NoColor));
        assert_eq!(dialog.channels(), (255, 255, 255));
    }

    #[test]
    fn test_paste_rejects_short_digit_groups() {
        let mut clipboard = MemoryClipboard::with_text("25,0,0");
        let mut dialog = ColorDialog::new();
        assert!(dialog.paste(&mut clipboard).is_err());
    }

    #[test]
    fn test_paste_rejects_empty_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        let mut dialog = ColorDialog::new();
        assert!(matches!(
            dialog.paste(&mut clipboard),
            Err(PasteError::Clipboard(ClipboardError::NoText))
        ));
    }

    #[test]
    fn test_visualize_mode_is_read_only() {
        let mut dialog = ColorDialog::visualize(Rgba::opaque(1, 2, 3));
        assert!(!dialog.editable());
        assert!(!dialog.set_red("100"));
        assert_eq!(dialog.channels(), (1, 2, 3));
        assert_eq!(dialog.close(true), DialogResult::Cancelled);

        // Copying the inspected color is still allowed; pasting over it is not.
        let mut clipboard = MemoryClipboard::new();
        dialog.copy(&mut clipboard).unwrap();
        assert_eq!(clipboard.get_text().unwrap(), "001,002,003");
        assert!(matches!(dialog.paste(&mut clipboard), Err(PasteError::ReadOnly)));
        assert_eq!(dialog.channels(), (1, 2, 3));
    }

    #[test]
    fn test_close_returns_picked_color() {
        let mut dialog = ColorDialog::new();
        dialog.set_red("128");
        dialog.set_green("064");
        dialog.set_blue("032");
        assert_eq!(dialog.close(true), DialogResult::Ok(Rgba::opaque(128, 64, 32)));
        assert_eq!(dialog.close(false), DialogResult::Cancelled);
    }
}
