//! Browser-side services used by the upload widget.
//!
//! # Services
//!
//! - [`encoding`] - read a `File` and encode it as a base64 data URL
//! - [`simulation`] - progress timeline and the cancellable upload task

pub mod encoding;
pub mod simulation;

pub use encoding::*;
pub use simulation::*;
