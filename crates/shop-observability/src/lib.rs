//! Logging setup for the shop client.
//!
//! Library crates only emit `tracing` events; binaries call [`init`] once at
//! startup to install a subscriber.

mod logging;

pub use logging::*;
