use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Vehicle;

/// Entrada del historial de reservas: el vehículo completo aplanado más la
/// fecha de reserva. La fecha se asigna al insertar y no cambia; quitar y
/// volver a reservar produce una fecha nueva.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingEntry {
    #[serde(flatten)]
    pub vehicle: Vehicle,

    #[serde(rename = "purchaseDate")]
    pub purchase_date: DateTime<Utc>,
}

impl BookingEntry {
    /// Crea una entrada sellada con la hora actual
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            purchase_date: Utc::now(),
        }
    }

    /// Fecha de reserva formateada para mostrar
    pub fn purchase_date_label(&self) -> String {
        self.purchase_date.format("%d %B %Y %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_flat_like_the_stored_shape() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "vehicle": "Toyota Avanza",
            "price": "Rp 250.000",
            "location": "Jakarta"
        }))
        .unwrap();

        let entry = BookingEntry::new(vehicle);
        let value = serde_json::to_value(&entry).unwrap();

        // Vehículo y fecha al mismo nivel, como lo escribía el cliente web
        assert_eq!(value["vehicle"], json!("Toyota Avanza"));
        assert_eq!(value["location"], json!("Jakarta"));
        assert!(value["purchaseDate"].is_string());
    }

    #[test]
    fn parses_legacy_iso_timestamps() {
        let entry: BookingEntry = serde_json::from_value(json!({
            "vehicle": "Honda Jazz",
            "purchaseDate": "2023-01-01T00:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(entry.vehicle.name, "Honda Jazz");
        assert_eq!(entry.purchase_date.to_rfc3339(), "2023-01-01T00:00:00+00:00");
    }
}
