use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

/// Ámbito de persistencia de la sesión: `localStorage` sobrevive al cierre
/// del navegador, `sessionStorage` muere con la pestaña.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StorageScope {
    Persistent,
    Session,
}

impl StorageScope {
    /// El otro ámbito (para limpiar al escribir una sesión nueva)
    pub fn other(self) -> Self {
        match self {
            StorageScope::Persistent => StorageScope::Session,
            StorageScope::Session => StorageScope::Persistent,
        }
    }
}

fn backing(scope: StorageScope) -> Option<Storage> {
    let win = window()?;
    match scope {
        StorageScope::Persistent => win.local_storage().ok()?,
        StorageScope::Session => win.session_storage().ok()?,
    }
}

pub fn save_string(scope: StorageScope, key: &str, value: &str) -> Result<(), String> {
    let storage = backing(scope).ok_or("No se pudo acceder al storage")?;
    storage.set_item(key, value)
        .map_err(|_| "Error guardando en storage".to_string())
}

pub fn load_string(scope: StorageScope, key: &str) -> Option<String> {
    backing(scope)?.get_item(key).ok()?
}

pub fn remove(scope: StorageScope, key: &str) {
    if let Some(storage) = backing(scope) {
        let _ = storage.remove_item(key);
    }
}

pub fn save_json<T: Serialize>(scope: StorageScope, key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    save_string(scope, key, &json)
}

pub fn load_json<T: DeserializeOwned>(scope: StorageScope, key: &str) -> Option<T> {
    let json = load_string(scope, key)?;
    serde_json::from_str(&json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_scope_flips() {
        assert_eq!(StorageScope::Persistent.other(), StorageScope::Session);
        assert_eq!(StorageScope::Session.other(), StorageScope::Persistent);
    }
}
