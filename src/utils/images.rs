// ============================================================================
// IMAGES - Artwork fijo para la flota conocida
// ============================================================================

use crate::models::Vehicle;

/// Imagen fija para vehículos conocidos de la flota; `None` si el vehículo
/// no tiene override y debe usarse el `imageURL` del registro.
pub fn vehicle_image_override(vehicle_name: &str) -> Option<&'static str> {
    let lower = vehicle_name.to_lowercase();

    if lower.contains("hiace premio") {
        Some("https://www.bluebirdgroup.com/storage/armadaservicecars/67adbc9e72449.png")
    } else if lower.contains("hiace commuter") {
        Some("https://www.bluebirdgroup.com/storage/armadaservicecars/67adbd014daa7.png")
    } else if lower.contains("charlie bus") {
        Some("https://www.bluebirdgroup.com/storage/armadaservicecars/6268f3f677c42.png")
    } else if lower.contains("regular") {
        Some("https://www.bluebirdgroup.com/storage/armadaservicecars/66b46d3c7f6fe.png")
    } else if lower.contains("silver") {
        Some("https://www.bluebirdgroup.com/storage/armadaservicecars/66b47218e288f.png")
    } else if lower.contains("isuzu elf") {
        Some("https://www.bluebirdgroup.com/storage/armadaservicecars/67adbc9e7a40b.png")
    } else {
        None
    }
}

/// Imagen a mostrar para un vehículo: override de la flota o el
/// `imageURL` que trajo el registro
pub fn vehicle_artwork(vehicle: &Vehicle) -> String {
    vehicle_image_override(&vehicle.name)
        .map(String::from)
        .or_else(|| vehicle.image_url.clone())
        .unwrap_or_default()
}

/// Logo de categoría según el nombre del servicio
pub fn category_image(category_name: &str) -> &'static str {
    let lower = category_name.to_lowercase();

    if lower.contains("taxi") {
        "https://www.bluebirdgroup.com/storage/armadaservicetype/67724b974f817.png"
    } else if lower.contains("shuttle") {
        "https://www.bluebirdgroup.com/storage/armadaservicetype/67724b9f173f4.png"
    } else if lower.contains("bus") {
        "https://www.bluebirdgroup.com/storage/armadaservicetype/67724bc6f1f7c.png"
    } else {
        // Car rental y cualquier otra cosa
        "https://www.bluebirdgroup.com/storage/armadaservicetype/67724b7ca3d8e.png"
    }
}

/// Texto alternativo del logo de categoría
pub fn category_alt(category_name: &str) -> &'static str {
    let lower = category_name.to_lowercase();

    if lower.contains("taxi") {
        "logo taxi service"
    } else if lower.contains("shuttle") {
        "logo shuttle service"
    } else if lower.contains("bus") {
        "logo bus service"
    } else if lower.contains("car") {
        "logo car rental"
    } else {
        "logo service"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn override_wins_over_image_url() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "vehicle": "Hiace Premio 2024",
            "imageURL": "https://example.com/own.png"
        }))
        .unwrap();

        assert!(vehicle_artwork(&vehicle).contains("67adbc9e72449"));
    }

    #[test]
    fn unknown_vehicle_falls_back_to_image_url() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "vehicle": "Mystery Van",
            "imageURL": "https://example.com/own.png"
        }))
        .unwrap();

        assert_eq!(vehicle_artwork(&vehicle), "https://example.com/own.png");
    }
}
