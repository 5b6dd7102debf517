//! # State Store
//!
//! Single-threaded state propagation for the dashboard: an [`EventBus`] for
//! publish/subscribe, a [`Store`] that owns the one [`models::AppState`] and
//! replaces it immutably on every edit, and the [`StateManager`] façade that
//! tags each slice update with its canonical [`EventName`].

pub mod event_bus;
pub mod events;
pub mod manager;
pub mod store;

pub use event_bus::{Callback, EventBus, Subscription};
pub use events::{EventName, EventPayload, ParseEventNameError};
pub use manager::StateManager;
pub use store::Store;
