//! Sensor dashboard widget core.
//!
//! Normalizes the loosely-shaped payloads of an external sensor API into
//! canonical series and log rows, generates demo data when that API is
//! unavailable, and drives the rendering collaborators of a dashboard widget.

pub mod config;
pub mod error;
pub mod normalize;
pub mod stream;
pub mod upstream;
pub mod widget;
