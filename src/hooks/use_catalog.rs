// ============================================================================
// USE CATALOG HOOK - Catálogo compartido vía ContextProvider
// ============================================================================

use yew::prelude::*;

use crate::services::ApiClient;
use crate::stores::CatalogStore;

/// Handle del catálogo que App comparte por contexto
#[derive(Clone, PartialEq)]
pub struct UseCatalogHandle {
    pub state: UseStateHandle<CatalogStore>,
    pub fetch: Callback<()>,
}

#[hook]
pub fn use_catalog() -> UseCatalogHandle {
    let state = use_state(CatalogStore::default);

    // Contador de generación: un fetch superado por otro más reciente
    // descarta su resultado al resolverse.
    let generation = use_mut_ref(|| 0u64);

    let fetch = {
        let state = state.clone();
        let generation = generation.clone();
        Callback::from(move |_| {
            let state = state.clone();
            let generation = generation.clone();
            let token = {
                let mut current = generation.borrow_mut();
                *current += 1;
                *current
            };

            let mut pending = (*state).clone();
            pending.start_loading();
            state.set(pending);

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = api.fetch_catalog().await;

                if *generation.borrow() != token {
                    log::info!("⏭️ Fetch de catálogo superado, resultado descartado");
                    return;
                }

                let mut next = (*state).clone();
                match result {
                    Ok(response) => {
                        next.apply_response(response);
                        log::info!(
                            "✅ Catálogo cargado: {} vehículos, {} categorías",
                            next.vehicles.len(),
                            next.categories.len()
                        );
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando catálogo: {}", e);
                        next.apply_error(e);
                    }
                }
                state.set(next);
            });
        })
    };

    UseCatalogHandle { state, fetch }
}
