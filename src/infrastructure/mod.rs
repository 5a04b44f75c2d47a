// Infrastructure layer - External dependencies and adapters
pub mod api_client;
pub mod config;
pub mod file_preferences;
pub mod http_response;
