#![no_std]

// Must come first so the logging macros are visible to the other modules
mod fmt;

mod clock;
mod config;
mod estimator;
mod state;
pub mod filters;
pub mod wrapping;

pub use clock::Clock;
pub use config::{Config, ConfigError};
pub use estimator::SpeedEstimator;
pub use filters::LowPassFilter;
pub use state::State;
pub use wrapping::{PulseCount, Timestamp};
