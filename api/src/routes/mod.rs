//! API route definitions.
//!
//! This module organizes all HTTP routes for the Railsight API server.

mod alerts;
mod health;
mod images;
mod reports;
mod telemetry;

pub use alerts::alert_routes;
pub use health::health_routes;
pub use images::image_routes;
pub use reports::report_routes;
pub use telemetry::telemetry_routes;
