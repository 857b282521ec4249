// ============================================================================
// FLEET ADMIN - PANEL DE ADMINISTRACIÓN DE LA FLOTA (Yew + WASM)
// ============================================================================
// Capa de estado del cliente:
// - services: comunicación HTTP + sesión (única puerta al backend)
// - hooks: estado por recurso (fetch/filtros/paginación/mutaciones)
// - models: estructuras compartidas con el backend + workflow de onboarding
// - components: pantallas que consumen los hooks (sin lógica propia)
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
