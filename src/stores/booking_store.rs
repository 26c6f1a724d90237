// ============================================================================
// BOOKING STORE - Historial de reservas, persistido en localStorage
// ============================================================================

use crate::models::{BookingEntry, Vehicle};
use crate::utils::constants::PURCHASE_HISTORY_KEY;
use crate::utils::storage::{load_from_storage, save_to_storage};

/// Reservas del usuario: colección ordenada de entradas únicas por nombre
/// de vehículo, cada una sellada con su fecha de reserva.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingStore {
    pub entries: Vec<BookingEntry>,
}

impl BookingStore {
    /// Hidrata el historial guardado; storage ausente o corrupto → vacío
    pub fn load() -> Self {
        Self {
            entries: load_from_storage(PURCHASE_HISTORY_KEY, Vec::new()),
        }
    }

    pub fn is_booked(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.vehicle.name == name)
    }

    /// Toggle por clave: cancela la reserva existente con el mismo nombre,
    /// o agrega una entrada nueva sellada con la hora actual.
    pub fn toggle(&mut self, vehicle: Vehicle) {
        if let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.vehicle.name == vehicle.name)
        {
            self.entries.remove(index);
        } else {
            self.entries.push(BookingEntry::new(vehicle));
        }
        self.persist();
    }

    /// Vacía el historial y persiste la colección vacía
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = save_to_storage(PURCHASE_HISTORY_KEY, &self.entries) {
            log::warn!("⚠️ No se pudo guardar el historial de reservas: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn vehicle(name: &str) -> Vehicle {
        serde_json::from_value(json!({ "vehicle": name, "price": "Rp 100.000" })).unwrap()
    }

    #[test]
    fn booking_is_stamped_at_insertion() {
        let mut store = BookingStore::default();
        let before = Utc::now();

        store.toggle(vehicle("toyota-avanza"));

        assert_eq!(store.entries.len(), 1);
        let entry = &store.entries[0];
        assert_eq!(entry.vehicle.name, "toyota-avanza");
        assert!(entry.purchase_date >= before);
    }

    #[test]
    fn toggle_cancels_existing_booking() {
        let mut store = BookingStore::default();
        store.toggle(vehicle("toyota-avanza"));
        store.toggle(vehicle("toyota-avanza"));

        assert!(store.entries.is_empty());
    }

    #[test]
    fn rebooking_gets_a_fresh_timestamp() {
        let mut store = BookingStore::default();
        store.toggle(vehicle("honda-jazz"));
        let first = store.entries[0].purchase_date;

        store.toggle(vehicle("honda-jazz"));
        store.toggle(vehicle("honda-jazz"));

        assert!(store.entries[0].purchase_date >= first);
    }

    #[test]
    fn distinct_vehicles_coexist() {
        let mut store = BookingStore::default();
        store.toggle(vehicle("a"));
        store.toggle(vehicle("b"));

        assert!(store.is_booked("a"));
        assert!(store.is_booked("b"));
        assert_eq!(store.entries.len(), 2);
    }

    #[test]
    fn clear_empties_the_history() {
        let mut store = BookingStore::default();
        store.toggle(vehicle("a"));

        store.clear();
        assert!(store.entries.is_empty());
    }

    #[test]
    fn load_without_storage_is_empty() {
        let store = BookingStore::load();
        assert!(store.entries.is_empty());
    }
}
