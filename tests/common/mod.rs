#![allow(dead_code)]

pub mod fixtures;
pub mod test_engine;
pub mod test_server;

pub use fixtures::{TestAddresses, TestRecords};
pub use test_engine::{CountingBackend, TestEngine, TestEngineBuilder};
pub use test_server::TestResolverServer;
