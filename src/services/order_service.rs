use serde::Serialize;

use crate::models::{
    ListFilters, Order, OrderFilters, OrderStatus, OrderUpdateResponse, OrdersResponse,
    PaymentStatus,
};
use crate::services::api_client::{self, ApiResult};

/// Listar pedidos con filtros/paginación
pub async fn fetch_orders(token: Option<&str>, filters: &OrderFilters) -> ApiResult<OrdersResponse> {
    let response: OrdersResponse =
        api_client::get_json("/orders", token, &filters.to_query()).await?;
    log::info!(
        "📦 Pedidos obtenidos: {} (página {}/{})",
        response.orders.len(),
        response.pagination.current_page,
        response.pagination.total_pages
    );
    Ok(response)
}

#[derive(Serialize)]
struct StatusBody {
    status: OrderStatus,
}

pub async fn update_order_status(
    token: Option<&str>,
    order_id: &str,
    status: OrderStatus,
) -> ApiResult<OrderUpdateResponse> {
    let url = format!("/orders/{}/status", order_id);
    let response: OrderUpdateResponse =
        api_client::put_json(&url, token, &StatusBody { status }).await?;
    log::info!("✅ Pedido {} → {}", order_id, status.as_str());
    Ok(response)
}

#[derive(Serialize)]
struct PaymentBody {
    payment_status: PaymentStatus,
}

pub async fn update_payment_status(
    token: Option<&str>,
    order_id: &str,
    payment_status: PaymentStatus,
) -> ApiResult<OrderUpdateResponse> {
    let url = format!("/orders/{}/payment", order_id);
    let response: OrderUpdateResponse =
        api_client::put_json(&url, token, &PaymentBody { payment_status }).await?;
    log::info!("💳 Pago de {} → {}", order_id, payment_status.as_str());
    Ok(response)
}

/// Tracking público por número de seguimiento (autoservicio del cliente)
pub async fn track_order(tracking_number: &str) -> ApiResult<Order> {
    let url = format!("/orders/track/{}", tracking_number);
    let order: Order = api_client::get_json(&url, None, &[]).await?;
    log::info!("🔍 Tracking {}: {}", tracking_number, order.status.as_str());
    Ok(order)
}
