use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Registro de vehículo tal como llega del API.
/// El campo `vehicle` del wire es el nombre visible y la clave de unicidad
/// en wishlist/reservas. Los campos que no modelamos se conservan sin tocar
/// en `extra` y vuelven intactos al persistir.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "vehicle", default)]
    pub name: String,

    // El mock API sirve el precio como string ("Rp 600.000") y los
    // fixtures antiguos como número; se muestra tal cual, sin validar.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub price: Value,

    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Vehicle {
    /// Precio como texto para mostrar
    pub fn price_label(&self) -> String {
        match &self.price {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Categoría de servicio. El API la sirve como registro `{id, name}`, pero
/// el contrato tolera strings sueltos (se muestran tal cual).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Record {
        #[serde(default)]
        id: Value,
        #[serde(default)]
        name: String,
    },
    Label(String),
}

impl Category {
    /// Nombre para mostrar
    pub fn display_name(&self) -> &str {
        match self {
            Category::Record { name, .. } => name,
            Category::Label(label) => label,
        }
    }

    /// Clave estable para listas renderizadas
    pub fn key(&self) -> String {
        match self {
            Category::Record { id: Value::Null, name } => name.clone(),
            Category::Record { id, .. } => id.to_string(),
            Category::Label(label) => label.clone(),
        }
    }
}

/// Respuesta cruda del endpoint de catálogo:
/// `{ category: [...], type: [ { car_type: [...] } ] }`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub category: Option<Vec<Category>>,

    #[serde(rename = "type", default)]
    pub groups: Option<Vec<VehicleGroup>>,
}

/// Grupo de vehículos dentro de la respuesta (`type[]`)
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VehicleGroup {
    #[serde(default)]
    pub car_type: Vec<Vehicle>,
}

impl CatalogResponse {
    /// Normaliza la respuesta: categorías tal cual, vehículos aplanando los
    /// grupos en una sola lista preservando el orden. Campos ausentes o
    /// nulos aportan listas vacías.
    pub fn into_parts(self) -> (Vec<Category>, Vec<Vehicle>) {
        let categories = self.category.unwrap_or_default();
        let vehicles = self
            .groups
            .unwrap_or_default()
            .into_iter()
            .flat_map(|group| group.car_type)
            .collect();
        (categories, vehicles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_groups_preserving_order() {
        let response: CatalogResponse = serde_json::from_value(json!({
            "category": [
                { "id": 1, "name": "Car Rental" },
                { "id": 2, "name": "Taxi" }
            ],
            "type": [
                { "car_type": [ { "vehicle": "x" }, { "vehicle": "y" } ] },
                { "car_type": [ { "vehicle": "z" } ] }
            ]
        }))
        .unwrap();

        let (categories, vehicles) = response.into_parts();
        let names: Vec<&str> = vehicles.iter().map(|v| v.name.as_str()).collect();

        assert_eq!(names, vec!["x", "y", "z"]);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].display_name(), "Car Rental");
    }

    #[test]
    fn missing_type_field_yields_empty_vehicles() {
        let response: CatalogResponse =
            serde_json::from_value(json!({ "category": [{ "id": 1, "name": "Bus" }] })).unwrap();

        let (categories, vehicles) = response.into_parts();
        assert!(vehicles.is_empty());
        assert_eq!(categories.len(), 1);
    }

    #[test]
    fn missing_category_and_null_type_degrade_to_empty() {
        let response: CatalogResponse =
            serde_json::from_value(json!({ "type": null })).unwrap();

        let (categories, vehicles) = response.into_parts();
        assert!(categories.is_empty());
        assert!(vehicles.is_empty());
    }

    #[test]
    fn group_without_inner_list_contributes_nothing() {
        let response: CatalogResponse = serde_json::from_value(json!({
            "type": [
                {},
                { "car_type": [ { "vehicle": "only" } ] }
            ]
        }))
        .unwrap();

        let (_, vehicles) = response.into_parts();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].name, "only");
    }

    #[test]
    fn string_categories_are_tolerated() {
        let response: CatalogResponse =
            serde_json::from_value(json!({ "category": ["A", "B"] })).unwrap();

        let (categories, _) = response.into_parts();
        let names: Vec<&str> = categories.iter().map(|c| c.display_name()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn unknown_vehicle_fields_round_trip() {
        let raw = json!({
            "vehicle": "Toyota Avanza",
            "price": 250000,
            "imageURL": "https://example.com/avanza.jpg",
            "location": "Jakarta",
            "seats": 7
        });

        let vehicle: Vehicle = serde_json::from_value(raw).unwrap();
        assert_eq!(vehicle.extra.get("location"), Some(&json!("Jakarta")));

        let back = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(back["vehicle"], json!("Toyota Avanza"));
        assert_eq!(back["price"], json!(250000));
        assert_eq!(back["location"], json!("Jakarta"));
        assert_eq!(back["seats"], json!(7));
    }

    #[test]
    fn price_label_renders_strings_and_numbers() {
        let priced: Vehicle =
            serde_json::from_value(json!({ "vehicle": "a", "price": "Rp 600.000" })).unwrap();
        assert_eq!(priced.price_label(), "Rp 600.000");

        let numeric: Vehicle =
            serde_json::from_value(json!({ "vehicle": "b", "price": 250000 })).unwrap();
        assert_eq!(numeric.price_label(), "250000");

        let bare: Vehicle = serde_json::from_value(json!({ "vehicle": "c" })).unwrap();
        assert_eq!(bare.price_label(), "");
    }
}
