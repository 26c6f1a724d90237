use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::UseWishlistHandle;
use crate::models::Vehicle;

#[derive(Properties, PartialEq, Clone)]
pub struct LikeButtonProps {
    pub vehicle: Vehicle,
}

/// Corazón que agrega/quita el vehículo de la wishlist
#[function_component(LikeButton)]
pub fn like_button(props: &LikeButtonProps) -> Html {
    let wishlist = use_context::<UseWishlistHandle>().expect("WishlistContext no encontrado");
    let is_liked = wishlist.state.contains(&props.vehicle.name);

    let onclick = {
        let toggle = wishlist.toggle.clone();
        let vehicle = props.vehicle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(vehicle.clone()))
    };

    let aria = if is_liked { "Remove from wishlist" } else { "Add to wishlist" };

    html! {
        <button
            class={classes!("like-button", is_liked.then_some("liked"))}
            onclick={onclick}
            aria-label={aria}
        >
            <svg
                viewBox="0 0 24 24"
                fill={if is_liked { "currentColor" } else { "none" }}
                stroke="currentColor"
                stroke-width="2"
            >
                <path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z" />
            </svg>
        </button>
    }
}
