pub mod http;

pub use http::HttpRemoteResolver;
