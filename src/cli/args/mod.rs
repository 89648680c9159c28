//! Shared CLI argument types

mod global;
mod log_level;

pub use global::GlobalOptions;
pub use log_level::{LogLevel, init_logger};
