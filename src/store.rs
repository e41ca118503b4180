//! Persistent preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser backend is `localStorage`; the trait seam keeps the
//! controller testable without one. Persistence is best-effort: a host that
//! denies storage access reads as empty and absorbs writes.

pub trait PreferenceStore {
    /// Stored value, `None` if never set or storage is unavailable.
    fn read(&self) -> Option<String>;

    /// Unconditionally overwrite the stored value.
    fn write(&self, value: &str);
}

#[cfg(feature = "web")]
pub use local::LocalStore;

#[cfg(feature = "web")]
mod local {
    use super::PreferenceStore;
    use crate::theme::STORAGE_KEY;

    /// `localStorage`-backed store for the `"theme"` key.
    pub struct LocalStore {
        storage: Option<web_sys::Storage>,
    }

    impl LocalStore {
        /// Wrap the window's `localStorage`. Access denial degrades to an
        /// always-empty store rather than failing the mount.
        #[must_use]
        pub fn from_window(window: &web_sys::Window) -> Self {
            Self {
                storage: window.local_storage().ok().flatten(),
            }
        }
    }

    impl PreferenceStore for LocalStore {
        fn read(&self) -> Option<String> {
            self.storage.as_ref()?.get_item(STORAGE_KEY).ok().flatten()
        }

        fn write(&self, value: &str) {
            if let Some(storage) = &self.storage {
                let _ = storage.set_item(STORAGE_KEY, value);
            }
        }
    }
}
