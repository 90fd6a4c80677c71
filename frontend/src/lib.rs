//! Floor Plan Studio - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a floor plan image. The upload
//! itself is simulated: the file is encoded as a data URL, a progress
//! bar fills on a timer, and the encoded file is handed over once the
//! bar completes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  "/"      UploadPage                                         │
//! │           ├── Header (sign-in toggle)                        │
//! │           ├── Hero (title, description)                      │
//! │           └── UploadWidget ── UploadStatus                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  "/plan"  PlanPreview (uploaded image)                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Constants and upload timings
//! - [`types`] - Common types (SelectedFile, AuthContext, AppError)
//! - [`state`] - Upload state machine
//! - [`components`] - UI components (Header, UploadWidget, etc.)
//! - [`services`] - Encoding and progress simulation

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    SelectedFile,
    // Contexts
    AuthContext, UploadedPlan,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{Tick, UploadPhase, UploadState};

// Components
pub use components::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Stand-in for the external auth provider.
    provide_context(AuthContext::new(false));
    provide_context(UploadedPlan::new());

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                    <Route path="/plan" view=PlanPreview/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    let auth = use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(false));
    let plan = use_context::<UploadedPlan>().unwrap_or_else(UploadedPlan::new);
    let config = UploadConfig::load();
    let navigate = use_navigate();

    let on_complete = Callback::new(move |data_url: String| {
        plan.0.set(Some(data_url));
        navigate("/plan", Default::default());
    });

    view! {
        <Header is_signed_in=auth.is_signed_in/>

        <div class="container">
            <Hero/>

            <UploadWidget
                is_signed_in=auth.is_signed_in
                config=config
                on_complete=on_complete
            />
        </div>
    }
}
