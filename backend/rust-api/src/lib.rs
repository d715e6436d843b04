// Library root - the server binary, the CLI tools and the tests all build on it

pub mod app_state;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;
pub mod utils;
pub mod websocket;

pub use app_state::AppState;
pub use config::Config;
pub use error::ApiError;
pub use router::build_router;
