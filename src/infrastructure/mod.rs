pub mod rest_executor;

pub use rest_executor::{ApiResponse, RestExecutor};
