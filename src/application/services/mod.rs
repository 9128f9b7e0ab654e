//! Application services

pub mod exposure;

pub use exposure::{ExposureReport, ExposureService};
