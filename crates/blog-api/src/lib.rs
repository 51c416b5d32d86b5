pub mod blogs;
pub mod client;
pub mod health;

pub use blogs::{Blog, BlogClient, BlogQuery, DEFAULT_LIMIT, Envelope, Pagination};
pub use client::{ApiError, ApiResponse, HttpClient};
pub use health::{HealthCheck, HealthStatus};
