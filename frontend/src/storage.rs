use podnet_shared::session::SessionStore;
use web_sys::Storage;

/// [`SessionStore`] backed by the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStore;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            web_sys::console::warn_1(&format!("Failed to persist `{key}`").into());
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
