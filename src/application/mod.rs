// Application layer - Session orchestration and ports to the outside world
pub mod dashboard_api;
pub mod preference_store;
pub mod session;
