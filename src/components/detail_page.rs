use yew::prelude::*;

use crate::hooks::UseCatalogHandle;
use crate::utils::images::vehicle_artwork;

use super::app::Page;
use super::{BookButton, CategorySlider, LikeButton, ShareButton};

#[derive(Properties, PartialEq)]
pub struct VehicleDetailPageProps {
    pub vehicle_name: String,
    pub on_navigate: Callback<Page>,
}

#[function_component(VehicleDetailPage)]
pub fn vehicle_detail_page(props: &VehicleDetailPageProps) -> Html {
    let catalog = use_context::<UseCatalogHandle>().expect("CatalogContext no encontrado");
    let store = (*catalog.state).clone();

    let back_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Home))
    };

    if store.loading && store.vehicles.is_empty() {
        return html! {
            <main class="page detail-page">
                <div class="spinner" />
            </main>
        };
    }

    let Some(vehicle) = store.find_vehicle(&props.vehicle_name).cloned() else {
        return html! {
            <main class="page detail-page">
                <div class="empty-state">
                    <h2>{"Vehicle Not Found"}</h2>
                    <p>{"The vehicle you're looking for doesn't exist."}</p>
                    <button class="primary-button" onclick={back_home}>{"Back to Home"}</button>
                </div>
            </main>
        };
    };

    html! {
        <main class="page detail-page">
            <CategorySlider />

            <div class="detail-layout">
                <div class="detail-media">
                    <img src={vehicle_artwork(&vehicle)} alt={vehicle.name.clone()} />
                    <div class="detail-actions">
                        <ShareButton />
                        <LikeButton vehicle={vehicle.clone()} />
                    </div>
                </div>

                <div class="detail-info">
                    <h1>{vehicle.name.clone()}</h1>
                    <div class="vehicle-price">{vehicle.price_label()}</div>
                    if let Some(description) = vehicle.description.clone() {
                        <section class="detail-specs">
                            <h2>{"Spesifikasi"}</h2>
                            <ul class="vehicle-description">
                                { for description.iter().map(|line| html! { <li>{line.clone()}</li> }) }
                            </ul>
                        </section>
                    }
                    <BookButton vehicle={vehicle.clone()} />
                </div>
            </div>
        </main>
    }
}
