//! Resolution use cases

pub mod instantiator;
pub mod resolver;

pub use instantiator::Instantiator;
pub use resolver::Resolver;
