pub mod config;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod middleware;
pub mod reminder;
pub mod response;
pub mod router;
pub mod state;
pub mod subscription;
pub mod tracing;
pub mod user;

pub use config::ApiConfig;
pub use state::ApiState;
