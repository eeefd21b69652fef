#![allow(dead_code)]


pub use mock_cache::MockCache;
