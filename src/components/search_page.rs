use yew::prelude::*;

use crate::hooks::UseCatalogHandle;
use crate::models::Vehicle;
use crate::utils::images::vehicle_artwork;

use super::app::Page;
use super::CategorySlider;

#[derive(Properties, PartialEq)]
pub struct SearchPageProps {
    pub query: String,
    pub on_navigate: Callback<Page>,
}

/// Resultados de búsqueda sobre el catálogo ya cargado
#[function_component(SearchPage)]
pub fn search_page(props: &SearchPageProps) -> Html {
    let catalog = use_context::<UseCatalogHandle>().expect("CatalogContext no encontrado");
    let store = (*catalog.state).clone();

    let results: Vec<Vehicle> = filter_vehicles(&store.vehicles, &props.query)
        .into_iter()
        .cloned()
        .collect();

    let body = if store.loading {
        html! { <p class="list-empty">{"Memuat kendaraan..."}</p> }
    } else if let Some(error) = store.error.clone() {
        html! { <p class="list-error">{error}</p> }
    } else if results.is_empty() {
        html! { <p class="list-empty">{"Tidak ada kendaraan yang cocok"}</p> }
    } else {
        html! {
            <>
                { for results.into_iter().map(|vehicle| {
                    let on_detail = {
                        let on_navigate = props.on_navigate.clone();
                        let name = vehicle.name.clone();
                        Callback::from(move |_| on_navigate.emit(Page::Detail(name.clone())))
                    };
                    html! {
                        <div class="search-result-card" key={vehicle.name.clone()}>
                            <div class="search-result-image">
                                <img src={vehicle_artwork(&vehicle)} alt={vehicle.name.clone()} />
                            </div>
                            <div class="search-result-body">
                                <h3>{vehicle.name.clone()}</h3>
                                <div class="vehicle-price">{vehicle.price_label()}</div>
                                if let Some(description) = vehicle.description.clone() {
                                    <ul class="vehicle-description">
                                        { for description.iter().map(|line| html! { <li>{line.clone()}</li> }) }
                                    </ul>
                                }
                                <button class="detail-button" onclick={on_detail}>
                                    {"Lihat Detail"}
                                </button>
                            </div>
                        </div>
                    }
                })}
            </>
        }
    };

    html! {
        <main class="page search-page">
            <header class="page-header">
                <h1>{"Hasil Pencarian"}</h1>
                <p>{format!("Menampilkan hasil untuk \"{}\"", props.query)}</p>
            </header>

            <CategorySlider />

            <div class="search-results">
                { body }
            </div>
        </main>
    }
}

/// Filtro por subcadena del nombre, sin distinguir mayúsculas,
/// preservando el orden del catálogo
pub fn filter_vehicles<'a>(vehicles: &'a [Vehicle], query: &str) -> Vec<&'a Vehicle> {
    let q = query.to_lowercase();
    vehicles
        .iter()
        .filter(|v| v.name.to_lowercase().contains(&q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vehicle(name: &str) -> Vehicle {
        serde_json::from_value(json!({ "vehicle": name })).unwrap()
    }

    #[test]
    fn filter_is_case_insensitive() {
        let vehicles = vec![vehicle("Hiace Premio"), vehicle("Charlie Bus"), vehicle("Silver Bird")];

        let hits = filter_vehicles(&vehicles, "hIaCe");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Hiace Premio");
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let vehicles = vec![vehicle("Bus A"), vehicle("Van"), vehicle("Bus B")];

        let names: Vec<&str> = filter_vehicles(&vehicles, "bus")
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bus A", "Bus B"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let vehicles = vec![vehicle("a"), vehicle("b")];
        assert_eq!(filter_vehicles(&vehicles, "").len(), 2);
    }
}
