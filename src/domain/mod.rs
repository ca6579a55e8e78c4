//! Domain layer - Tag rules and policy model

pub mod policy;
pub mod tags;

pub use policy::TracingPolicy;
pub use tags::TagValidator;
