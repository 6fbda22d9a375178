//! Named handle registry
//!
//! The registry pattern shared by every layer manager.

mod registry;

pub use registry::{Registry, RegistryEntry};
