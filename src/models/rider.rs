use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Coordinates, ListFilters, Pagination};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiderStatus {
    Pending,
    Active,
    Rejected,
    Suspended,
    Online,
    Offline,
}

impl RiderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiderStatus::Pending => "PENDING",
            RiderStatus::Active => "ACTIVE",
            RiderStatus::Rejected => "REJECTED",
            RiderStatus::Suspended => "SUSPENDED",
            RiderStatus::Online => "ONLINE",
            RiderStatus::Offline => "OFFLINE",
        }
    }

    pub fn parse_filter(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(RiderStatus::Pending),
            "ACTIVE" => Some(RiderStatus::Active),
            "REJECTED" => Some(RiderStatus::Rejected),
            "SUSPENDED" => Some(RiderStatus::Suspended),
            "ONLINE" => Some(RiderStatus::Online),
            "OFFLINE" => Some(RiderStatus::Offline),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct VehicleDetails {
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub plate_number: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Última posición reportada por el rider (solo lectura en esta capa)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RiderLocation {
    pub coordinates: Coordinates,
    #[serde(default)]
    pub address: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RiderPerformance {
    #[serde(default)]
    pub total_deliveries: u64,
    #[serde(default)]
    pub on_time_rate: f64,
    #[serde(default)]
    pub average_rating: f64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Rider {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: RiderStatus,
    #[serde(default)]
    pub availability: bool,
    #[serde(default)]
    pub vehicle_details: VehicleDetails,
    #[serde(default)]
    pub current_location: Option<RiderLocation>,
    #[serde(default)]
    pub performance: RiderPerformance,
}

impl Rider {
    pub fn is_connected(&self) -> bool {
        self.status == RiderStatus::Online
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RiderFilters {
    pub status: Option<RiderStatus>,
    pub search: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for RiderFilters {
    fn default() -> Self {
        Self {
            status: None,
            search: String::new(),
            page: 1,
            limit: 20,
        }
    }
}

impl ListFilters for RiderFilters {
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
        if !self.search.is_empty() {
            query.push(("search", self.search.clone()));
        }
        query.push(("page", self.page.to_string()));
        query.push(("limit", self.limit.to_string()));
        query
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RidersResponse {
    pub riders: Vec<Rider>,
    pub pagination: Pagination,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RiderUpdateResponse {
    pub message: String,
    pub rider: Rider,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ActiveRidersResponse {
    pub riders: Vec<Rider>,
}
