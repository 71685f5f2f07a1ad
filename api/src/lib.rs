//! Server side of the account dashboard.
//!
//! Persistence and authentication are collaborators behind [`MetricsStore`]
//! and [`SessionProvider`]; this crate only sequences them and hands the rows
//! to the `ui` chart builders.

mod config;
mod dashboard;
mod error;
mod session;
mod store;

pub use config::DashboardConfig;
pub use dashboard::{load_account_dashboard, sign_out_action, AccountDashboard};
pub use error::{ApiError, Redirect};
pub use session::{Session, SessionProvider};
pub use store::{MemoryStore, MetricsQuery, MetricsStore};
