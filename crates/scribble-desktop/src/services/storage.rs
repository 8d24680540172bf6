//! Local storage bootstrap for the desktop app.

use scribble_core::{FileStore, MemoryStore};

use crate::config::DesktopConfig;
use crate::state::LocalStorage;

/// Open the on-disk store, falling back to a volatile one if the file is unusable.
pub fn open_local_storage(config: &DesktopConfig) -> LocalStorage {
    let path = config.store_path();
    match FileStore::open(&path) {
        Ok(store) => {
            tracing::info!("Using local storage at {}", path.display());
            Box::new(store)
        }
        Err(e) => {
            tracing::error!(
                "Failed to open local storage at {}: {}. Changes will not be saved.",
                path.display(),
                e
            );
            Box::new(MemoryStore::new())
        }
    }
}
