//! HTTP API handlers for ecoscan-api

pub mod health;
pub mod scan;
pub mod search;

pub use health::health_routes;
pub use scan::scan_routes;
pub use search::search_routes;
