// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::models::CatalogResponse;
use crate::utils::constants::CATALOG_API_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CATALOG_API_URL.to_string(),
        }
    }

    /// Descarga el catálogo completo de vehículos
    pub async fn fetch_catalog(&self) -> Result<CatalogResponse, String> {
        log::info!("🚗 Descargando catálogo desde {}", self.base_url);

        let response = Request::get(&self.base_url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<CatalogResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}
