use yew::prelude::*;

use crate::hooks::UseCatalogHandle;
use crate::utils::images::{category_alt, category_image};

/// Franja horizontal de categorías; oculta mientras no haya categorías
#[function_component(CategorySlider)]
pub fn category_slider() -> Html {
    let catalog = use_context::<UseCatalogHandle>().expect("CatalogContext no encontrado");
    let categories = catalog.state.categories.clone();

    if categories.is_empty() {
        return html! {};
    }

    html! {
        <section class="category-slider">
            <h2>{"Categories"}</h2>
            <div class="category-track">
                { for categories.iter().map(|cat| html! {
                    <div class="category-card" key={cat.key()}>
                        <img
                            src={category_image(cat.display_name())}
                            alt={category_alt(cat.display_name())}
                        />
                        <p>{cat.display_name().to_string()}</p>
                    </div>
                })}
            </div>
        </section>
    }
}
