// ============================================================================
// STORAGE - Única frontera de persistencia (localStorage)
// ============================================================================
// Lecturas: nunca fallan, cualquier problema devuelve el valor por defecto.
// Escrituras: best-effort, el que llama registra el error y sigue.
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use web_sys::Storage;

#[cfg(target_arch = "wasm32")]
pub fn get_local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Fuera del navegador (tests nativos) no hay storage
#[cfg(not(target_arch = "wasm32"))]
pub fn get_local_storage() -> Option<Storage> {
    None
}

/// Lee y deserializa el valor guardado bajo `key`.
/// Storage inaccesible, clave ausente o JSON corrupto → `default`.
pub fn load_from_storage<T: DeserializeOwned>(key: &str, default: T) -> T {
    let Some(storage) = get_local_storage() else {
        return default;
    };
    match storage.get_item(key) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("⚠️ Dato corrupto en localStorage ({}): {}", key, e);
                default
            }
        },
        _ => default,
    }
}

/// Serializa y guarda `value` bajo `key`
pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // En tests nativos no hay localStorage: el wrapper degrada al valor
    // por defecto sin propagar nada.

    #[test]
    fn load_without_storage_returns_default() {
        let value: Vec<String> = load_from_storage("wishlist", Vec::new());
        assert!(value.is_empty());

        let fallback = load_from_storage("purchaseHistory", 42u32);
        assert_eq!(fallback, 42);
    }

    #[test]
    fn save_without_storage_reports_error() {
        let result = save_to_storage("wishlist", &vec!["a", "b"]);
        assert!(result.is_err());
    }
}
