use yew::prelude::*;

use crate::hooks::UseCatalogHandle;

use super::app::Page;
use super::{CategorySlider, VehicleList};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let catalog = use_context::<UseCatalogHandle>().expect("CatalogContext no encontrado");

    // Fetch del catálogo al montar la página. Cada visita re-lanza la
    // descarga; un fetch pendiente superado se descarta al resolverse.
    {
        let fetch = catalog.fetch.clone();
        use_effect_with((), move |_| {
            fetch.emit(());
            || ()
        });
    }

    let on_select = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |name: String| on_navigate.emit(Page::Detail(name)))
    };

    html! {
        <main class="page home-page">
            <CategorySlider />
            <VehicleList {on_select} />
        </main>
    }
}
