//! Application services
//!
//! Local storage bootstrap, export, and native dialogs.

mod export;
mod storage;
mod window;

pub use export::{export_notes_to_path, pick_export_path};
pub use storage::open_local_storage;
pub use window::confirm_close;
