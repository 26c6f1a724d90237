// ============================================================================
// RIDECAR CATALOG - Catálogo de alquiler de vehículos (Rust + Yew)
// ============================================================================
// - Models: estructuras del wire (serde)
// - Services: SOLO comunicación API
// - Stores: contenedores de estado + persistencia best-effort
// - Hooks: puente entre stores y componentes (Context)
// - Components: páginas y widgets Yew
// ============================================================================

pub mod components;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
