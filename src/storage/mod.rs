//! Storage Layer
//!
//! Path resolution and the JSON blob persistence collaborator.

pub mod paths;
pub mod store;

pub use store::StateStore;
