//! Ink Color Dialog
//!
//! UI-toolkit-agnostic model of the RGB color picker dialog: three byte
//! channels, a live preview color, and clipboard round-tripping in the
//! `"RRR,GGG,BBB"` encoding shared with the property layer. The front end
//! binds text fields and buttons to [`ColorDialog`] and supplies a
//! [`Clipboard`] implementation ([`SystemClipboard`] in the app,
//! [`MemoryClipboard`] in tests).

pub mod clipboard;
pub mod dialog;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use dialog::{ColorDialog, DialogMode, DialogResult, PasteError};
