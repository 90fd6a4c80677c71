//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - metadata of the user-chosen file
//! - **Context Types** - values shared through Leptos contexts
//! - **Error Types** - frontend error handling

use leptos::*;
use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// Metadata of the file the user picked or dropped.
///
/// The blob itself stays with the upload task; the state machine only
/// needs what the status card displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name, as shown in the status card
    pub name: String,
    /// Declared MIME type (may be empty)
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Read the metadata of a browser `File`.
    pub fn from_web_file(file: &web_sys::File) -> Self {
        Self::new(file.name(), file.type_(), file.size() as u64)
    }

    /// Whether the declared type is an image (`image/*`).
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

// =============================================================================
// Context Types
// =============================================================================

/// Sign-in state provided by the application shell.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub is_signed_in: RwSignal<bool>,
}

impl AuthContext {
    pub fn new(signed_in: bool) -> Self {
        Self {
            is_signed_in: create_rw_signal(signed_in),
        }
    }
}

/// Data URL of the last delivered upload, read by the plan preview page.
#[derive(Clone, Copy, Debug)]
pub struct UploadedPlan(pub RwSignal<Option<String>>);

impl UploadedPlan {
    pub fn new() -> Self {
        Self(create_rw_signal(None))
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// The browser could not read the file.
    #[error("Failed to read file: {0}")]
    FileRead(String),
    /// Invalid configuration block.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_detection() {
        assert!(SelectedFile::new("plan.png", "image/png", 10).is_image());
        assert!(SelectedFile::new("plan.jpg", "image/jpeg", 10).is_image());
        assert!(!SelectedFile::new("notes.txt", "text/plain", 10).is_image());
        assert!(!SelectedFile::new("plan", "", 10).is_image());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::FileRead("NotReadableError".to_string());
        assert_eq!(err.to_string(), "Failed to read file: NotReadableError");
    }
}
