use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Tiempo que se muestra la confirmación de copiado
const COPIED_RESET_MS: u32 = 2_000;

/// Copia la URL actual al portapapeles y confirma brevemente
#[function_component(ShareButton)]
pub fn share_button() -> Html {
    let copied = use_state(|| false);

    let onclick = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let href = window.location().href().unwrap_or_default();
                let clipboard = window.navigator().clipboard();

                match JsFuture::from(clipboard.write_text(&href)).await {
                    Ok(_) => {
                        copied.set(true);
                        let copied = copied.clone();
                        Timeout::new(COPIED_RESET_MS, move || copied.set(false)).forget();
                    }
                    Err(e) => log::error!("❌ No se pudo copiar la URL: {:?}", e),
                }
            });
        })
    };

    let label = if *copied { "Copied!" } else { "Share" };

    html! {
        <button class="share-button" onclick={onclick} aria-label="Share vehicle">
            { label }
        </button>
    }
}
