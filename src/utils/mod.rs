//! # Utility Modules
//!
//! Supporting utilities shared by the library and the `nwcalc` binary.
//!
//! ## Components
//! - **Logging**: tracing subscriber setup driven by `LoggingConfig`

pub mod logging;

pub use logging::init_logging;
