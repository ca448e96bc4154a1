//! Ink Core Library
//!
//! Platform-agnostic document model for the Ink whiteboard editor: pages,
//! drawable objects, string-encoded observable properties and the property
//! synchronization graph. Window layout, control binding, file dialogs and
//! painting are the front end's job; this crate only exposes the state those
//! layers bind to.

pub mod color;
pub mod document;
pub mod naming;
pub mod objects;
pub mod page;
pub mod property;
pub mod sync;

pub use color::Rgba;
pub use document::{Document, DocumentError};
pub use naming::NameRegistry;
pub use objects::{InkObject, ObjectId, ObjectKind, ObjectState};
pub use page::{Page, PageBackground};
pub use property::{Property, PropertyKind};
pub use sync::{PropertyRef, SyncError, SyncGraph};
