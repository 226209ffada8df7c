//! Dashboard widget orchestration.

pub mod chart;
pub mod controller;
pub mod surfaces;

pub use chart::ChartSlot;
pub use controller::{DashboardController, RequestTag, SensorView, fetch_sensor_view};
pub use surfaces::{CardSurface, ChartSurface, LogTable, VideoSurface};
