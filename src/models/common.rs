use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Estado de paginación de una colección remota.
/// Cada hook es dueño de la suya; nunca se comparte entre recursos.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default = "default_limit")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_items: 0,
            per_page: 20,
        }
    }
}

impl Pagination {
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

/// Respuesta mínima de los endpoints de mutación: `{message, ...}`
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Filtros de listado: lo que cada hook serializa hacia `GET /<recurso>`.
/// La construcción de la query es aditiva: solo campos presentes y distintos
/// del centinela "all" llegan a la URL.
pub trait ListFilters: Clone + PartialEq + Default + 'static {
    fn page(&self) -> u32;
    fn set_page(&mut self, page: u32);
    /// Pares clave/valor a serializar; los valores van sin escapar
    /// (el API client los percent-encodea al construir la URL).
    fn to_query(&self) -> Vec<(&'static str, String)>;
}
