pub mod collection;
pub mod use_active_riders;
pub mod use_customers;
pub mod use_debounce;
pub mod use_orders;
pub mod use_pending_riders;
pub mod use_riders;
pub mod use_session;

pub use collection::Collection;
pub use use_active_riders::{use_active_riders, UseActiveRidersHandle};
pub use use_customers::{use_customers, UseCustomersHandle};
pub use use_debounce::use_debounced_callback;
pub use use_orders::{use_orders, UseOrdersHandle};
pub use use_pending_riders::{use_pending_riders, UsePendingRidersHandle};
pub use use_riders::{use_riders, UseRidersHandle};
pub use use_session::{use_session, UseSessionHandle};
