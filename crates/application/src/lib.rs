//! UNS Application Layer
//!
//! Ports describe the capabilities the resolution engine depends on; use cases
//! are the entry points the CLI and other outer layers call.
pub mod ports;
pub mod services;
pub mod use_cases;
