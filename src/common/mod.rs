//! Common utilities shared by the binary and the invoker

pub mod config;
pub mod error;
pub mod logging;

pub use config::InvokerConfig;
pub use error::{Error, Result};
