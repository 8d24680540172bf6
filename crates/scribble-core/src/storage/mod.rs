//! Local key-value storage backends.
//!
//! Values are opaque strings addressed by string keys, mirroring the browser
//! `localStorage` contract so any environment can supply an equivalent store.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::Result;

/// String key-value storage operations shared across backends.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` from the store. Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
