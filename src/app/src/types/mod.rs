//! Domain-based type organization
//!
//! - device: devices, server listing and the local registry
//! - draft: the device being composed before a wake
//! - expiring: values cleared by a shell timer
//! - feedback: error and success notices

pub mod device;
pub mod draft;
pub mod expiring;
pub mod feedback;

pub use device::*;
pub use draft::*;
pub use expiring::*;
pub use feedback::*;
