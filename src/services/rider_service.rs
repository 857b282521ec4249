use serde::{Deserialize, Serialize};

use crate::models::{
    ActiveRidersResponse, ListFilters, MessageResponse, Pagination, PendingFilters,
    PendingRiderApplication, Rider, RiderFilters, RiderStatus, RiderUpdateResponse,
    RidersResponse,
};
use crate::services::api_client::{self, ApiResult};

pub async fn fetch_riders(token: Option<&str>, filters: &RiderFilters) -> ApiResult<RidersResponse> {
    let response: RidersResponse =
        api_client::get_json("/riders", token, &filters.to_query()).await?;
    log::info!("🏍️ Riders obtenidos: {}", response.riders.len());
    Ok(response)
}

#[derive(Serialize)]
struct StatusBody {
    status: RiderStatus,
}

pub async fn update_rider_status(
    token: Option<&str>,
    rider_id: &str,
    status: RiderStatus,
) -> ApiResult<RiderUpdateResponse> {
    let url = format!("/riders/{}/status", rider_id);
    let response: RiderUpdateResponse =
        api_client::put_json(&url, token, &StatusBody { status }).await?;
    log::info!("✅ Rider {} → {}", rider_id, status.as_str());
    Ok(response)
}

pub async fn delete_rider(token: Option<&str>, rider_id: &str) -> ApiResult<MessageResponse> {
    let url = format!("/riders/{}", rider_id);
    let response: MessageResponse = api_client::delete_json(&url, token).await?;
    log::info!("🗑️ Rider {} eliminado", rider_id);
    Ok(response)
}

// La paginación de pendientes llega con `total_riders` en vez de
// `total_items`; se convierte aquí para que el hook use la misma Pagination
#[derive(Deserialize)]
struct WirePendingPagination {
    #[serde(default = "default_page")]
    current_page: u32,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_riders: u64,
    #[serde(default = "default_limit")]
    per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

#[derive(Deserialize)]
struct WirePendingResponse {
    riders: Vec<PendingRiderApplication>,
    pagination: WirePendingPagination,
}

pub struct PendingRidersResponse {
    pub riders: Vec<PendingRiderApplication>,
    pub pagination: Pagination,
}

pub async fn fetch_pending_riders(
    token: Option<&str>,
    filters: &PendingFilters,
) -> ApiResult<PendingRidersResponse> {
    let response: WirePendingResponse =
        api_client::get_json("/riders/pending", token, &filters.to_query()).await?;
    log::info!("📋 Solicitudes pendientes: {}", response.riders.len());
    Ok(PendingRidersResponse {
        riders: response.riders,
        pagination: Pagination {
            current_page: response.pagination.current_page,
            total_pages: response.pagination.total_pages,
            total_items: response.pagination.total_riders,
            per_page: response.pagination.per_page,
        },
    })
}

pub async fn approve_rider(token: Option<&str>, rider_id: &str) -> ApiResult<MessageResponse> {
    let url = format!("/riders/{}/approve", rider_id);
    let response: MessageResponse = api_client::post_empty(&url, token).await?;
    log::info!("✅ Solicitud {} aprobada", rider_id);
    Ok(response)
}

#[derive(Serialize)]
struct RejectBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

pub async fn reject_rider(
    token: Option<&str>,
    rider_id: &str,
    reason: Option<String>,
) -> ApiResult<MessageResponse> {
    let url = format!("/riders/{}/reject", rider_id);
    let response: MessageResponse =
        api_client::post_json(&url, token, &RejectBody { reason }).await?;
    log::info!("🚫 Solicitud {} rechazada", rider_id);
    Ok(response)
}

/// Riders activos para el mapa; sin paginación, el poll la refresca entera
pub async fn fetch_active_riders(token: Option<&str>) -> ApiResult<Vec<Rider>> {
    let response: ActiveRidersResponse =
        api_client::get_json("/riders/active", token, &[]).await?;
    log::info!("📍 Riders activos: {}", response.riders.len());
    Ok(response.riders)
}
