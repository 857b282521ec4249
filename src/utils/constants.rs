/// Claves de browser storage para la sesión.
/// Token y usuario se escriben y se borran SIEMPRE juntos.
pub const STORAGE_KEY_TOKEN: &str = "fleetAdmin_token";
pub const STORAGE_KEY_USER: &str = "fleetAdmin_user";
pub const STORAGE_KEY_REMEMBER: &str = "fleetAdmin_remember";

/// Valor centinela de los selects de filtro: no se serializa en la query
pub const FILTER_ALL: &str = "all";
