// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Única puerta hacia el backend: construye URLs, inyecta el bearer token y
// normaliza cualquier fallo en un ApiError tipado. Sin reintentos, sin
// timeout, sin caché: un intento por llamada.
// ============================================================================

use std::collections::HashMap;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::CONFIG;
use crate::utils::percent_encode;

/// Error normalizado de la capa HTTP.
/// `status == 0` significa fallo de red (sin respuesta del servidor).
#[derive(Clone, PartialEq, Debug)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    /// Mapa campo → mensaje cuando el servidor reporta errores de validación
    pub errors: Option<HashMap<String, String>>,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: 0,
            errors: None,
        }
    }

    /// Fallo local (serialización, storage); mismo status 0 que un fallo de red
    pub fn local(message: impl Into<String>) -> Self {
        Self::network(message)
    }

    pub fn is_network(&self) -> bool {
        self.status == 0
    }

    /// 401: token caducado o inválido. Esta capa NO fuerza el logout
    /// (solo el refresh fallido tira la sesión); el consumidor decide.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
    }

    pub fn is_validation_error(&self) -> bool {
        self.errors.is_some()
    }

    async fn from_response(response: Response) -> Self {
        let status = response.status();
        match response.text().await {
            Ok(body) => parse_error_body(status, &body),
            Err(_) => Self {
                message: format!("HTTP {}", status),
                status,
                errors: None,
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.status == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} (HTTP {})", self.message, self.status)
        }
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

/// Cuerpo de error que devuelve el backend: `{message}` o `{error}`,
/// opcionalmente con un mapa `errors` de validación
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<HashMap<String, String>>,
}

/// Intenta parsear el cuerpo como JSON; si no, el texto plano es el mensaje
pub fn parse_error_body(status: u16, body: &str) -> ApiError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        let message = parsed
            .message
            .or(parsed.error)
            .unwrap_or_else(|| format!("HTTP {}", status));
        return ApiError {
            message,
            status,
            errors: parsed.errors,
        };
    }

    let trimmed = body.trim();
    ApiError {
        message: if trimmed.is_empty() {
            format!("HTTP {}", status)
        } else {
            trimmed.to_string()
        },
        status,
        errors: None,
    }
}

/// Query string aditiva: solo los pares presentes llegan a la URL.
/// Los filtros ya omiten el centinela "all" y los campos vacíos.
pub fn build_query(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{}", joined)
}

fn endpoint_url(path: &str, query: &[(&str, String)]) -> String {
    format!("{}{}{}", CONFIG.backend_url(), path, build_query(query))
}

fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::local(format!("Parse error: {}", e)))
}

pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    query: &[(&str, String)],
) -> ApiResult<T> {
    let url = endpoint_url(path, query);
    let response = with_auth(Request::get(&url), token)
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Network error: {}", e)))?;
    decode(response).await
}

pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> ApiResult<T> {
    let url = endpoint_url(path, &[]);
    let response = with_auth(Request::post(&url), token)
        .json(body)
        .map_err(|e| ApiError::local(format!("Serialization error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Network error: {}", e)))?;
    decode(response).await
}

/// POST sin cuerpo (logout, refresh, approve...)
pub async fn post_empty<T: DeserializeOwned>(path: &str, token: Option<&str>) -> ApiResult<T> {
    let url = endpoint_url(path, &[]);
    let response = with_auth(Request::post(&url), token)
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Network error: {}", e)))?;
    decode(response).await
}

pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> ApiResult<T> {
    let url = endpoint_url(path, &[]);
    let response = with_auth(Request::put(&url), token)
        .json(body)
        .map_err(|e| ApiError::local(format!("Serialization error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Network error: {}", e)))?;
    decode(response).await
}

pub async fn delete_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> ApiResult<T> {
    let url = endpoint_url(path, &[]);
    let response = with_auth(Request::delete(&url), token)
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Network error: {}", e)))?;
    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListFilters, OrderFilters, OrderStatus};

    #[test]
    fn query_serializes_present_fields_only() {
        let filters = OrderFilters {
            status: Some(OrderStatus::Delivered),
            ..Default::default()
        };
        assert_eq!(
            build_query(&filters.to_query()),
            "?status=DELIVERED&page=1&limit=20"
        );
    }

    #[test]
    fn default_filters_omit_status_and_search() {
        let query = build_query(&OrderFilters::default().to_query());
        assert_eq!(query, "?page=1&limit=20");
    }

    #[test]
    fn query_values_are_encoded() {
        let query = build_query(&[("search", "calle mayor & 5".to_string())]);
        assert_eq!(query, "?search=calle%20mayor%20%26%205");
    }

    #[test]
    fn empty_query_has_no_question_mark() {
        assert_eq!(build_query(&[]), "");
    }

    #[test]
    fn error_body_prefers_message_key() {
        let err = parse_error_body(422, r#"{"message":"Invalid status","errors":{"status":"unknown value"}}"#);
        assert_eq!(err.message, "Invalid status");
        assert_eq!(err.status, 422);
        assert!(err.is_validation_error());
        assert_eq!(
            err.errors.unwrap().get("status").map(String::as_str),
            Some("unknown value")
        );
    }

    #[test]
    fn error_body_falls_back_to_error_key_then_text() {
        let err = parse_error_body(401, r#"{"error":"Token expired"}"#);
        assert_eq!(err.message, "Token expired");
        assert!(err.is_auth_error());

        let err = parse_error_body(502, "Bad Gateway");
        assert_eq!(err.message, "Bad Gateway");

        let err = parse_error_body(500, "");
        assert_eq!(err.message, "HTTP 500");
    }

    #[test]
    fn network_errors_use_status_zero() {
        let err = ApiError::network("Network error: failed to fetch");
        assert!(err.is_network());
        assert!(!err.is_auth_error());
        assert_eq!(format!("{}", err), "Network error: failed to fetch");
    }
}
