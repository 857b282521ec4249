use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub active_riders_poll_secs: u32,
    pub search_debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://api.delivery.nexuslabs.one".to_string(),
            environment: "development".to_string(),
            active_riders_poll_secs: 30,
            search_debounce_ms: 400,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:3000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.delivery.nexuslabs.one").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            active_riders_poll_secs: option_env!("ACTIVE_RIDERS_POLL_SECS")
                .unwrap_or("30").parse().unwrap_or(30),
            search_debounce_ms: option_env!("SEARCH_DEBOUNCE_MS")
                .unwrap_or("400").parse().unwrap_or(400),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_switches_on_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:3000");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://api.delivery.nexuslabs.one");
    }
}
