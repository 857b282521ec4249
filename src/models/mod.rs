pub mod auth;
pub mod common;
pub mod customer;
pub mod onboarding;
pub mod order;
pub mod rider;

pub use auth::*;
pub use common::*;
pub use customer::*;
pub use onboarding::*;
pub use order::*;
pub use rider::*;
