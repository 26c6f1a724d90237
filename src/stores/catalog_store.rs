// ============================================================================
// CATALOG STORE - Catálogo de vehículos + ciclo de vida del fetch
// ============================================================================

use crate::models::{CatalogResponse, Category, Vehicle};

/// Estado del catálogo - Compatible con use_state_handle.
/// `loading`/`error` forman el ciclo idle → pending → (fulfilled | rejected).
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogStore {
    pub categories: Vec<Category>,
    pub vehicles: Vec<Vehicle>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            vehicles: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl CatalogStore {
    /// Transición a `pending`: limpia el error anterior
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Transición a `fulfilled`: reemplaza el catálogo completo
    pub fn apply_response(&mut self, response: CatalogResponse) {
        let (categories, vehicles) = response.into_parts();
        self.categories = categories;
        self.vehicles = vehicles;
        self.loading = false;
        self.error = None;
    }

    /// Transición a `rejected`: conserva el catálogo anterior
    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Busca un vehículo por nombre, sin distinguir mayúsculas
    pub fn find_vehicle(&self, name: &str) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(names: &[&str]) -> CatalogResponse {
        let cars: Vec<_> = names.iter().map(|n| json!({ "vehicle": n })).collect();
        serde_json::from_value(json!({
            "category": [{ "id": 1, "name": "Car Rental" }],
            "type": [{ "car_type": cars }]
        }))
        .unwrap()
    }

    #[test]
    fn starts_idle_and_empty() {
        let store = CatalogStore::default();
        assert!(store.categories.is_empty());
        assert!(store.vehicles.is_empty());
        assert!(!store.loading);
        assert!(store.error.is_none());
    }

    #[test]
    fn pending_clears_previous_error() {
        let mut store = CatalogStore::default();
        store.apply_error("Network error: timeout".to_string());

        store.start_loading();
        assert!(store.loading);
        assert!(store.error.is_none());
    }

    #[test]
    fn fulfilled_replaces_catalog_wholesale() {
        let mut store = CatalogStore::default();
        store.start_loading();
        store.apply_response(response(&["x", "y"]));

        assert_eq!(store.vehicles.len(), 2);
        assert!(!store.loading);

        // Una segunda respuesta reemplaza, nunca acumula
        store.start_loading();
        store.apply_response(response(&["z"]));
        assert_eq!(store.vehicles.len(), 1);
        assert_eq!(store.vehicles[0].name, "z");
    }

    #[test]
    fn rejected_keeps_previous_catalog() {
        let mut store = CatalogStore::default();
        store.apply_response(response(&["x", "y"]));

        store.start_loading();
        store.apply_error("HTTP 500: Internal Server Error".to_string());

        assert_eq!(store.vehicles.len(), 2);
        assert_eq!(store.categories.len(), 1);
        assert!(!store.loading);
        assert_eq!(store.error.as_deref(), Some("HTTP 500: Internal Server Error"));
    }

    #[test]
    fn find_vehicle_ignores_case() {
        let mut store = CatalogStore::default();
        store.apply_response(response(&["Hiace Premio"]));

        assert!(store.find_vehicle("hiace premio").is_some());
        assert!(store.find_vehicle("no-such").is_none());
    }
}
