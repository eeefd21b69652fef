#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_registries;

pub use mock_registries::{
    CallLog, CountingRegistry, FailingRegistry, MockRemoteResolver, SlowRegistry, SlowRemoteResolver,
    StallingRegistry,
};
pub use record_builders::RecordBuilder;
pub use resolver_server_mock::{MockBehavior, MockResolverServer};
