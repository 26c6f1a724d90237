// ============================================================================
// USE WISHLIST HOOK - Favoritos compartidos vía ContextProvider
// ============================================================================

use yew::prelude::*;

use crate::models::Vehicle;
use crate::stores::WishlistStore;

/// Handle de la wishlist que App comparte por contexto
#[derive(Clone, PartialEq)]
pub struct UseWishlistHandle {
    pub state: UseStateHandle<WishlistStore>,
    pub toggle: Callback<Vehicle>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_wishlist() -> UseWishlistHandle {
    // El estado inicial se hidrata desde localStorage una sola vez
    let state = use_state(WishlistStore::load);

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

    UseWishlistHandle { state, toggle, clear }
}
