use yew::prelude::*;

use crate::hooks::UseWishlistHandle;

use super::app::Page;
use super::{CategorySlider, VehicleCard};

#[derive(Properties, PartialEq)]
pub struct WishlistPageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(WishlistPage)]
pub fn wishlist_page(props: &WishlistPageProps) -> Html {
    let wishlist = use_context::<UseWishlistHandle>().expect("WishlistContext no encontrado");
    let items = wishlist.state.items.clone();

    let on_select = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |name: String| on_navigate.emit(Page::Detail(name)))
    };

    let browse = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Home))
    };

    let clear_all = {
        let clear = wishlist.clear.clone();
        Callback::from(move |_| clear.emit(()))
    };

    html! {
        <main class="page wishlist-page">
            <CategorySlider />

            <header class="page-header">
                <div>
                    <h1>{"My Wishlist"}</h1>
                    <p>{"Kendaraan yang Anda sukai"}</p>
                </div>
                if !items.is_empty() {
                    <button class="clear-button" onclick={clear_all}>{"Kosongkan Wishlist"}</button>
                }
            </header>

            if items.is_empty() {
                <div class="empty-state">
                    <h2>{"Wishlist Kosong"}</h2>
                    <p>{"Belum ada kendaraan yang ditambahkan ke wishlist"}</p>
                    <button class="primary-button" onclick={browse}>{"Jelajahi Kendaraan"}</button>
                </div>
            } else {
                <div class="vehicle-grid">
                    { for items.into_iter().map(|vehicle| html! {
                        <VehicleCard
                            key={vehicle.name.clone()}
                            vehicle={vehicle.clone()}
                            on_select={on_select.clone()}
                        />
                    })}
                </div>
            }
        </main>
    }
}
