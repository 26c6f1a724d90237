use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::UseBookingsHandle;
use crate::utils::images::vehicle_artwork;

use super::app::Page;
use super::CategorySlider;

#[derive(Properties, PartialEq)]
pub struct BookingsPageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(BookingsPage)]
pub fn bookings_page(props: &BookingsPageProps) -> Html {
    let bookings = use_context::<UseBookingsHandle>().expect("BookingsContext no encontrado");
    let entries = bookings.state.entries.clone();

    let browse = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Home))
    };

    let clear_all = {
        let clear = bookings.clear.clone();
        Callback::from(move |_| clear.emit(()))
    };

    html! {
        <main class="page bookings-page">
            <CategorySlider />

            <header class="page-header">
                <div>
                    <h1>{"My Bookings"}</h1>
                    <p>{"Riwayat pemesanan kendaraan Anda"}</p>
                </div>
                if !entries.is_empty() {
                    <button class="clear-button" onclick={clear_all}>{"Hapus Semua"}</button>
                }
            </header>

            if entries.is_empty() {
                <div class="empty-state">
                    <h2>{"Belum Ada Booking"}</h2>
                    <p>{"Belum ada kendaraan yang dipesan"}</p>
                    <button class="primary-button" onclick={browse}>{"Jelajahi Kendaraan"}</button>
                </div>
            } else {
                <div class="booking-list">
                    { for entries.into_iter().map(|entry| {
                        let open_detail = {
                            let on_navigate = props.on_navigate.clone();
                            let name = entry.vehicle.name.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_navigate.emit(Page::Detail(name.clone()))
                            })
                        };
                        let cancel = {
                            let toggle = bookings.toggle.clone();
                            let vehicle = entry.vehicle.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                toggle.emit(vehicle.clone());
                            })
                        };
                        html! {
                            <div class="booking-card" key={entry.vehicle.name.clone()}>
                                <div class="booking-media" onclick={open_detail.clone()}>
                                    <img
                                        src={vehicle_artwork(&entry.vehicle)}
                                        alt={entry.vehicle.name.clone()}
                                    />
                                </div>
                                <div class="booking-body">
                                    <div class="booking-summary" onclick={open_detail}>
                                        <span class="booking-status">{"Booked"}</span>
                                        <h3>{entry.vehicle.name.clone()}</h3>
                                        <div class="vehicle-price">{entry.vehicle.price_label()}</div>
                                        <p class="booking-date">
                                            {format!("Dipesan pada: {}", entry.purchase_date_label())}
                                        </p>
                                        if let Some(description) = entry.vehicle.description.clone() {
                                            <ul class="vehicle-description">
                                                { for description.iter().map(|line| html! { <li>{line.clone()}</li> }) }
                                            </ul>
                                        }
                                    </div>
                                    <div class="booking-actions">
                                        <div class="booking-confirmation">{"Booking Berhasil"}</div>
                                        <button class="cancel-button" onclick={cancel}>{"Cancel"}</button>
                                    </div>
                                </div>
                            </div>
                        }
                    })}
                </div>
            }
        </main>
    }
}
