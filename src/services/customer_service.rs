use serde::Serialize;

use crate::models::{
    CustomerFilters, CustomerStatus, CustomerUpdateResponse, CustomersResponse, ListFilters,
};
use crate::services::api_client::{self, ApiResult};

pub async fn fetch_customers(
    token: Option<&str>,
    filters: &CustomerFilters,
) -> ApiResult<CustomersResponse> {
    let response: CustomersResponse =
        api_client::get_json("/customers", token, &filters.to_query()).await?;
    log::info!("👥 Clientes obtenidos: {}", response.customers.len());
    Ok(response)
}

#[derive(Serialize)]
struct StatusBody {
    status: CustomerStatus,
}

pub async fn update_customer_status(
    token: Option<&str>,
    customer_id: &str,
    status: CustomerStatus,
) -> ApiResult<CustomerUpdateResponse> {
    let url = format!("/customers/{}/status", customer_id);
    let response: CustomerUpdateResponse =
        api_client::put_json(&url, token, &StatusBody { status }).await?;
    log::info!("✅ Cliente {} → {}", customer_id, status.as_str());
    Ok(response)
}
