// ============================================================================
// APP - Shell de la aplicación y navegación por estado
// ============================================================================

use yew::prelude::*;

use crate::hooks::{
    use_bookings, use_catalog, use_wishlist, UseBookingsHandle, UseCatalogHandle,
    UseWishlistHandle,
};

use super::{BookingsPage, Footer, HomePage, Navbar, SearchPage, VehicleDetailPage, WishlistPage};

/// Páginas de la aplicación. Sin router de URL: la navegación es estado
/// y los enlaces emiten el callback de navegación.
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Home,
    Search(String),
    Detail(String),
    Wishlist,
    Bookings,
}

#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_catalog();
    let wishlist = use_wishlist();
    let bookings = use_bookings();
    let page = use_state(|| Page::Home);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    let content = match (*page).clone() {
        Page::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
        Page::Search(query) => html! { <SearchPage {query} on_navigate={on_navigate.clone()} /> },
        Page::Detail(name) => {
            html! { <VehicleDetailPage vehicle_name={name} on_navigate={on_navigate.clone()} /> }
        }
        Page::Wishlist => html! { <WishlistPage on_navigate={on_navigate.clone()} /> },
        Page::Bookings => html! { <BookingsPage on_navigate={on_navigate.clone()} /> },
    };

    html! {
        <ContextProvider<UseCatalogHandle> context={catalog}>
            <ContextProvider<UseWishlistHandle> context={wishlist}>
                <ContextProvider<UseBookingsHandle> context={bookings}>
                    <Navbar on_navigate={on_navigate.clone()} />
                    { content }
                    <Footer />
                </ContextProvider<UseBookingsHandle>>
            </ContextProvider<UseWishlistHandle>>
        </ContextProvider<UseCatalogHandle>>
    }
}
