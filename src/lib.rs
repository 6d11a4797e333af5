pub mod api;
pub mod config;
pub mod models;
pub mod upstream;

// Re-export commonly used types
pub use api::state::AppState;
pub use config::Settings;
