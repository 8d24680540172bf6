//! scribble-core - Core library for Scribble
//!
//! This crate contains the note model, the local key-value store, the
//! persistence adapter, form validation, and export rendering used by the
//! Scribble desktop app.

pub mod error;
pub mod export;
pub mod models;
pub mod notebook;
pub mod persistence;
pub mod storage;
pub mod validation;

pub use error::{Error, Result};
pub use models::Note;
pub use notebook::Notebook;
pub use persistence::LocalPersistence;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use validation::{NoteForm, ValidationError};
