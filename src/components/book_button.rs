use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::UseBookingsHandle;
use crate::models::Vehicle;

#[derive(Properties, PartialEq, Clone)]
pub struct BookButtonProps {
    pub vehicle: Vehicle,
}

/// Reserva o cancela la reserva del vehículo
#[function_component(BookButton)]
pub fn book_button(props: &BookButtonProps) -> Html {
    let bookings = use_context::<UseBookingsHandle>().expect("BookingsContext no encontrado");
    let is_booked = bookings.state.is_booked(&props.vehicle.name);

    let onclick = {
        let toggle = bookings.toggle.clone();
        let vehicle = props.vehicle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(vehicle.clone()))
    };

    let label = if is_booked { "Cancel Booking" } else { "Book Now" };

    html! {
        <button
            class={classes!("book-button", is_booked.then_some("booked"))}
            onclick={onclick}
        >
            { label }
        </button>
    }
}
