pub mod engine;
pub mod model;
pub mod observability;
pub mod wire;
