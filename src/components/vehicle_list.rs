use yew::prelude::*;

use crate::hooks::UseCatalogHandle;
use crate::models::Vehicle;

use super::VehicleCard;

/// Cantidad de vehículos destacados en la home
const FEATURED_COUNT: usize = 4;

#[derive(Properties, PartialEq)]
pub struct VehicleListProps {
    pub on_select: Callback<String>,
}

#[function_component(VehicleList)]
pub fn vehicle_list(props: &VehicleListProps) -> Html {
    let catalog = use_context::<UseCatalogHandle>().expect("CatalogContext no encontrado");
    let vehicles = &catalog.state.vehicles;

    if vehicles.is_empty() {
        return html! { <p class="list-empty">{"Loading vehicles..."}</p> };
    }

    let featured = pick_featured(vehicles, FEATURED_COUNT);

    html! {
        <section class="vehicle-list">
            <h2>{"Available Vehicles"}</h2>
            <div class="vehicle-grid">
                { for featured.into_iter().map(|vehicle| html! {
                    <VehicleCard
                        key={vehicle.name.clone()}
                        vehicle={vehicle.clone()}
                        on_select={props.on_select.clone()}
                    />
                })}
            </div>
        </section>
    }
}

/// Selección aleatoria de destacados (Fisher-Yates parcial sobre una copia)
fn pick_featured(vehicles: &[Vehicle], count: usize) -> Vec<Vehicle> {
    let mut pool = vehicles.to_vec();
    let mut picked = Vec::with_capacity(count.min(pool.len()));

    while !pool.is_empty() && picked.len() < count {
        let index = (js_sys::Math::random() * pool.len() as f64) as usize;
        picked.push(pool.swap_remove(index.min(pool.len() - 1)));
    }
    picked
}
