mod client;

pub use client::SensorApiClient;
