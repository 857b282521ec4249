pub mod api_client;
pub mod auth_service;
pub mod customer_service;
pub mod order_service;
pub mod rider_service;
