/// URL del catálogo remoto
/// Configurada en tiempo de compilación:
/// - Por defecto: mock API pública (Apiary)
/// - Producción: via CATALOG_API_URL env var
pub const CATALOG_API_URL: &str = match option_env!("CATALOG_API_URL") {
    Some(url) => url,
    None => "https://private-f2fbfb-ridecar2.apiary-mock.com/vehicles",
};

/// Clave de localStorage para la wishlist
pub const WISHLIST_KEY: &str = "wishlist";

/// Clave de localStorage para el historial de reservas
pub const PURCHASE_HISTORY_KEY: &str = "purchaseHistory";
