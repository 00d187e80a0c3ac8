//! Process configuration: store connection descriptor and listen address.

pub mod loader;

pub use loader::*;
