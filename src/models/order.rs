use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ListFilters, Pagination};

/// Estado de un pedido. El avance es monótono hacia delante en este orden;
/// CANCELLED es alcanzable desde cualquier estado no terminal.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Accepted,
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::PickedUp => "PICKED_UP",
            OrderStatus::InTransit => "IN_TRANSIT",
            OrderStatus::OutForDelivery => "OUT_FOR_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Valor de un `<select>` de filtro; "all" es el centinela sin filtro
    pub fn parse_filter(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(OrderStatus::Pending),
            "ACCEPTED" => Some(OrderStatus::Accepted),
            "PICKED_UP" => Some(OrderStatus::PickedUp),
            "IN_TRANSIT" => Some(OrderStatus::InTransit),
            "OUT_FOR_DELIVERY" => Some(OrderStatus::OutForDelivery),
            "DELIVERED" => Some(OrderStatus::Delivered),
            "CANCELLED" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    fn sequence_index(self) -> Option<u8> {
        match self {
            OrderStatus::Pending => Some(0),
            OrderStatus::Accepted => Some(1),
            OrderStatus::PickedUp => Some(2),
            OrderStatus::InTransit => Some(3),
            OrderStatus::OutForDelivery => Some(4),
            OrderStatus::Delivered => Some(5),
            OrderStatus::Cancelled => None,
        }
    }

    /// Tabla de transiciones: solo hacia delante, nunca desde un terminal;
    /// cancelar vale desde cualquier estado no terminal.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        if self.is_terminal() || self == next {
            return false;
        }
        if next == OrderStatus::Cancelled {
            return true;
        }
        match (self.sequence_index(), next.sequence_index()) {
            (Some(from), Some(to)) => to > from,
            _ => false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Refunded => "REFUNDED",
        }
    }

    pub fn parse_filter(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(PaymentStatus::Pending),
            "PAID" => Some(PaymentStatus::Paid),
            "REFUNDED" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ParcelSize {
    Small,
    Medium,
    Large,
}

impl ParcelSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParcelSize::Small => "small",
            ParcelSize::Medium => "medium",
            ParcelSize::Large => "large",
        }
    }

    pub fn parse_filter(value: &str) -> Option<Self> {
        match value {
            "small" => Some(ParcelSize::Small),
            "medium" => Some(ParcelSize::Medium),
            "large" => Some(ParcelSize::Large),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CustomerRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RiderRef {
    pub id: String,
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Order {
    pub id: String,
    /// Único e inmutable; es la clave del tracking público
    pub tracking_number: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub parcel_size: ParcelSize,
    pub pickup_address: String,
    pub delivery_address: String,
    pub customer: CustomerRef,
    /// Nulo hasta que un rider acepta el pedido
    #[serde(default)]
    pub rider: Option<RiderRef>,
    pub delivery_fee: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl Order {
    /// En curso: todo lo que no es terminal
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Delivered
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == OrderStatus::Cancelled
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct OrderFilters {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub parcel_size: Option<ParcelSize>,
    pub search: String,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for OrderFilters {
    fn default() -> Self {
        Self {
            status: None,
            payment_status: None,
            parcel_size: None,
            search: String::new(),
            date_from: None,
            date_to: None,
            page: 1,
            limit: 20,
        }
    }
}

impl ListFilters for OrderFilters {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(payment) = self.payment_status {
            query.push(("payment_status", payment.as_str().to_string()));
        }
        if let Some(size) = self.parcel_size {
            query.push(("parcel_size", size.as_str().to_string()));
        }
        if !self.search.is_empty() {
            query.push(("search", self.search.clone()));
        }
        if let Some(from) = &self.date_from {
            query.push(("date_from", from.clone()));
        }
        if let Some(to) = &self.date_to {
            query.push(("date_to", to.clone()));
        }
        query.push(("page", self.page.to_string()));
        query.push(("limit", self.limit.to_string()));
        query
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
    pub pagination: Pagination,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct OrderUpdateResponse {
    pub message: String,
    pub order: Order,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_move_forward_only() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Accepted));
        assert!(OrderStatus::PickedUp.can_transition_to(OrderStatus::OutForDelivery));
        assert!(!OrderStatus::InTransit.can_transition_to(OrderStatus::Accepted));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn cancel_reachable_from_any_non_terminal() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::OutForDelivery.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn terminal_states_are_frozen() {
        for next in [
            OrderStatus::Pending,
            OrderStatus::Accepted,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert!(!OrderStatus::Delivered.can_transition_to(next));
            assert!(!OrderStatus::Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn status_serializes_to_wire_names() {
        let json = serde_json::to_string(&OrderStatus::PickedUp).unwrap();
        assert_eq!(json, "\"PICKED_UP\"");
        let back: OrderStatus = serde_json::from_str("\"OUT_FOR_DELIVERY\"").unwrap();
        assert_eq!(back, OrderStatus::OutForDelivery);
    }

    #[test]
    fn filter_query_is_additive() {
        let filters = OrderFilters {
            status: Some(OrderStatus::Delivered),
            ..Default::default()
        };
        let query = filters.to_query();
        assert_eq!(
            query,
            vec![
                ("status", "DELIVERED".to_string()),
                ("page", "1".to_string()),
                ("limit", "20".to_string()),
            ]
        );
    }

    #[test]
    fn filter_updates_keep_merged_fields_and_reset_page() {
        let mut filters = OrderFilters {
            status: Some(OrderStatus::Pending),
            search: "ACME".to_string(),
            page: 5,
            ..Default::default()
        };
        // lo que hace update_filters antes de disparar el fetch
        filters.set_page(1);

        let query = filters.to_query();
        assert!(query.contains(&("status", "PENDING".to_string())));
        assert!(query.contains(&("search", "ACME".to_string())));
        assert!(query.contains(&("page", "1".to_string())));
    }

    #[test]
    fn all_sentinel_maps_to_no_filter() {
        assert_eq!(OrderStatus::parse_filter("all"), None);
        assert_eq!(OrderStatus::parse_filter("DELIVERED"), Some(OrderStatus::Delivered));
        let filters = OrderFilters::default();
        assert!(filters.to_query().iter().all(|(key, _)| *key != "status"));
    }
}
