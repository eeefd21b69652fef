pub mod resolver;
pub mod use_cases;

pub use resolver::ResolverServices;
pub use use_cases::UseCases;
