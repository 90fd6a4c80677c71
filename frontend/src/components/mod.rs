//! UI Components for the floor plan upload application.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with the sign-in toggle
//! - [`Hero`] - Main title and description
//!
//! # Feature Components
//! - [`UploadWidget`] - Image upload with drag & drop and simulated progress
//! - [`UploadStatus`] - Status card shown once a file is accepted
//! - [`PlanPreview`] - Uploaded plan, shown after the redirect

mod header;
mod hero;
mod plan;
mod progress;
mod upload;

pub use header::*;
pub use hero::*;
pub use plan::*;
pub use progress::*;
pub use upload::*;
