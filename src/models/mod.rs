//! Data models

pub mod assessment;
pub mod metrics;

pub use assessment::*;
pub use metrics::*;
