// ============================================================================
// USE BOOKINGS HOOK - Historial de reservas compartido vía ContextProvider
// ============================================================================

use yew::prelude::*;

use crate::models::Vehicle;
use crate::stores::BookingStore;

/// Handle de reservas que App comparte por contexto
#[derive(Clone, PartialEq)]
pub struct UseBookingsHandle {
    pub state: UseStateHandle<BookingStore>,
    pub toggle: Callback<Vehicle>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_bookings() -> UseBookingsHandle {
    // El estado inicial se hidrata desde localStorage una sola vez
    let state = use_state(BookingStore::load);

    let toggle = {
        let state = state.clone();
        Callback::from(move |vehicle: Vehicle| {
            let mut next = (*state).clone();
            next.toggle(vehicle);
            state.set(next);
        })
    };

    let clear = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.clear();
            state.set(next);
        })
    };

    UseBookingsHandle { state, toggle, clear }
}
