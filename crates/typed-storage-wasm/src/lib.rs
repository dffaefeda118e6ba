//! Web Storage backend: puts typed values into `localStorage` or
//! `sessionStorage` through [`typed_storage::TypedStorage`].

use tracing::debug;
use typed_storage::{Error, KeyValueStore, Result, TypedStorage};
use wasm_bindgen::prelude::*;

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(feature = "size_opt")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console.
/// Call this once when the module is loaded for improved debugging.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Get the version of the typed-storage bindings
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Which of the two Web Storage areas to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Local,
    Session,
}

impl Area {
    pub fn name(self) -> &'static str {
        match self {
            Area::Local => "localStorage",
            Area::Session => "sessionStorage",
        }
    }
}

/// A [`KeyValueStore`] over a `web_sys::Storage` object.
///
/// Writes can fail in the browser (quota exceeded, storage disabled); those
/// errors come back as [`Error::Store`].
pub struct BrowserStore {
    area: Area,
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn open(area: Area) -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| Error::Store("no global `window` object".into()))?;
        let storage = match area {
            Area::Local => window.local_storage(),
            Area::Session => window.session_storage(),
        }
        .map_err(|e| js_error(area, e))?
        .ok_or_else(|| Error::Store(format!("{} is not available", area.name())))?;
        debug!(area = area.name(), "browser storage opened");
        Ok(Self { area, storage })
    }

    pub fn local() -> Result<Self> {
        Self::open(Area::Local)
    }

    pub fn session() -> Result<Self> {
        Self::open(Area::Session)
    }

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn into_typed(self) -> TypedStorage<Self> {
        TypedStorage::new(self)
    }
}

fn js_error(area: Area, err: JsValue) -> Error {
    Error::Store(format!("{}: {:?}", area.name(), err))
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(|e| js_error(self.area, e))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| js_error(self.area, e))
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| js_error(self.area, e))
    }

    fn clear(&mut self) -> Result<()> {
        self.storage.clear().map_err(|e| js_error(self.area, e))
    }

    fn len(&self) -> Result<usize> {
        self.storage
            .length()
            .map(|n| n as usize)
            .map_err(|e| js_error(self.area, e))
    }

    fn key(&self, index: usize) -> Result<Option<String>> {
        let Ok(index) = u32::try_from(index) else {
            return Ok(None);
        };
        self.storage.key(index).map_err(|e| js_error(self.area, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_area_names() {
        assert_eq!(Area::Local.name(), "localStorage");
        assert_eq!(Area::Session.name(), "sessionStorage");
    }
}
