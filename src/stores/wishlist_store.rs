// ============================================================================
// WISHLIST STORE - Vehículos favoritos, persistidos en localStorage
// ============================================================================

use crate::models::Vehicle;
use crate::utils::constants::WISHLIST_KEY;
use crate::utils::storage::{load_from_storage, save_to_storage};

/// Colección ordenada de vehículos, única por nombre.
/// Cada mutación persiste la colección completa; si la escritura falla se
/// registra y el estado en memoria sigue siendo la autoridad de la sesión.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WishlistStore {
    pub items: Vec<Vehicle>,
}

impl WishlistStore {
    /// Hidrata la wishlist guardada; storage ausente o corrupto → vacía
    pub fn load() -> Self {
        Self {
            items: load_from_storage(WISHLIST_KEY, Vec::new()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    /// Toggle por clave: quita la entrada existente con el mismo nombre,
    /// o agrega el vehículo al final.
    pub fn toggle(&mut self, vehicle: Vehicle) {
        if let Some(index) = self.items.iter().position(|item| item.name == vehicle.name) {
            self.items.remove(index);
        } else {
            self.items.push(vehicle);
        }
        self.persist();
    }

    /// Vacía la wishlist y persiste la colección vacía
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = save_to_storage(WISHLIST_KEY, &self.items) {
            log::warn!("⚠️ No se pudo guardar la wishlist: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vehicle(name: &str) -> Vehicle {
        serde_json::from_value(json!({ "vehicle": name, "price": "Rp 100.000" })).unwrap()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut store = WishlistStore::default();

        store.toggle(vehicle("toyota-avanza"));
        assert_eq!(store.items.len(), 1);
        assert!(store.contains("toyota-avanza"));

        store.toggle(vehicle("toyota-avanza"));
        assert!(store.items.is_empty());
    }

    #[test]
    fn double_toggle_restores_prior_state_and_order() {
        let mut store = WishlistStore::default();
        store.toggle(vehicle("a"));
        store.toggle(vehicle("b"));
        let before = store.clone();

        store.toggle(vehicle("c"));
        store.toggle(vehicle("c"));

        assert_eq!(store, before);
    }

    #[test]
    fn same_key_distinct_objects_collide() {
        let mut store = WishlistStore::default();
        store.toggle(vehicle("honda-jazz"));

        // Un objeto distinto con la misma clave no convive: el toggle
        // quita la entrada existente en vez de duplicar o fusionar.
        let other: Vehicle =
            serde_json::from_value(json!({ "vehicle": "honda-jazz", "price": "Rp 999.999" }))
                .unwrap();
        store.toggle(other);

        assert!(store.items.is_empty());
    }

    #[test]
    fn distinct_keys_coexist_in_dispatch_order() {
        let mut store = WishlistStore::default();
        store.toggle(vehicle("a"));
        store.toggle(vehicle("b"));

        let names: Vec<&str> = store.items.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn clear_always_yields_empty() {
        let mut store = WishlistStore::default();
        store.toggle(vehicle("a"));
        store.toggle(vehicle("b"));

        store.clear();
        assert!(store.items.is_empty());

        // Vaciar una colección ya vacía también es válido
        store.clear();
        assert!(store.items.is_empty());
    }

    #[test]
    fn load_without_storage_is_empty() {
        let store = WishlistStore::load();
        assert!(store.items.is_empty());
    }
}
