use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ListFilters, Pagination};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Suspended,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "ACTIVE",
            CustomerStatus::Inactive => "INACTIVE",
            CustomerStatus::Suspended => "SUSPENDED",
        }
    }

    pub fn parse_filter(value: &str) -> Option<Self> {
        match value {
            "ACTIVE" => Some(CustomerStatus::Active),
            "INACTIVE" => Some(CustomerStatus::Inactive),
            "SUSPENDED" => Some(CustomerStatus::Suspended),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub status: CustomerStatus,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_spent: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    pub fn is_active(&self) -> bool {
        self.status == CustomerStatus::Active
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct CustomerFilters {
    pub status: Option<CustomerStatus>,
    pub search: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for CustomerFilters {
    fn default() -> Self {
        Self {
            status: None,
            search: String::new(),
            page: 1,
            limit: 20,
        }
    }
}

impl ListFilters for CustomerFilters {
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
pub struct CustomersResponse {
    pub customers: Vec<Customer>,
    pub pagination: Pagination,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct CustomerUpdateResponse {
    pub message: String,
    pub customer: Customer,
}
