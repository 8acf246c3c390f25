//! # Utility Modules
//!
//! Supporting utilities that sit beside the codec.
//!
//! ## Components
//! - **Logging**: `tracing-subscriber` setup driven by `LoggingConfig`

pub mod logging;

pub use logging::init_logging;
