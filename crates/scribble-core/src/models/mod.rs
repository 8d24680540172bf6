//! Data models for Scribble

mod note;

pub use note::Note;
