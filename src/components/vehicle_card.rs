use web_sys::MouseEvent;
use yew::prelude::*;

use crate::models::Vehicle;
use crate::utils::images::vehicle_artwork;

use super::LikeButton;

#[derive(Properties, PartialEq, Clone)]
pub struct VehicleCardProps {
    pub vehicle: Vehicle,
    /// click en el card: navega al detalle
    pub on_select: Callback<String>,
}

#[function_component(VehicleCard)]
pub fn vehicle_card(props: &VehicleCardProps) -> Html {
    let vehicle = &props.vehicle;

    let on_card_click = {
        let on_select = props.on_select.clone();
        let name = vehicle.name.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(name.clone()))
    };

    // El corazón no debe disparar la navegación del card
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="vehicle-card" onclick={on_card_click}>
            <img class="vehicle-image" src={vehicle_artwork(vehicle)} alt={vehicle.name.clone()} />
            <div class="vehicle-card-header">
                <p class="vehicle-name">{vehicle.name.clone()}</p>
                <div onclick={swallow_click}>
                    <LikeButton vehicle={vehicle.clone()} />
                </div>
            </div>
            <p class="vehicle-price">{vehicle.price_label()}</p>
            if let Some(description) = vehicle.description.clone() {
                <ul class="vehicle-description">
                    { for description.iter().map(|line| html! { <li>{line.clone()}</li> }) }
                </ul>
            }
        </div>
    }
}
