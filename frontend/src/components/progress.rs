use leptos::*;

use crate::state::{UploadPhase, UploadState};

/// Icon for the status card.
fn status_icon(phase: &UploadPhase, progress: u8) -> &'static str {
    match phase {
        UploadPhase::Failed(_) => "⚠️",
        _ if progress >= 100 => "✅",
        _ => "🖼️",
    }
}

/// Message under the progress bar.
fn status_text(phase: &UploadPhase, progress: u8) -> String {
    match phase {
        UploadPhase::Failed(message) => message.clone(),
        _ if progress < 100 => "Analyzing Floor Plan...".to_string(),
        _ => "Redirecting...".to_string(),
    }
}

#[component]
pub fn UploadStatus(state: ReadSignal<UploadState>, on_reset: Callback<()>) -> impl IntoView {
    let failed = move || state.with(|s| matches!(s.phase(), UploadPhase::Failed(_)));

    view! {
        <div class="upload-status">
            <div class="status-content">
                <div class="status-icon" class:check=move || state.with(|s| s.is_complete())>
                    {move || state.with(|s| status_icon(s.phase(), s.progress()))}
                </div>

                <h3>{move || state.with(|s| s.file().map(|f| f.name.clone()).unwrap_or_default())}</h3>

                <div class="progress">
                    <div
                        class="bar"
                        style=move || format!("width: {}%", state.with(|s| s.progress()))
                    ></div>

                    <p class="status-text" class:error=failed>
                        {move || state.with(|s| status_text(s.phase(), s.progress()))}
                    </p>
                </div>

                <Show
                    when=failed
                    fallback=|| view! { }
                >
                    <button class="upload-button" on:click=move |_| on_reset.call(())>
                        "Choose another file"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_status() {
        assert_eq!(status_icon(&UploadPhase::Progressing, 40), "🖼️");
        assert_eq!(status_text(&UploadPhase::Progressing, 40), "Analyzing Floor Plan...");
        assert_eq!(status_text(&UploadPhase::Encoding, 0), "Analyzing Floor Plan...");
    }

    #[test]
    fn test_complete_status() {
        assert_eq!(status_icon(&UploadPhase::Complete, 100), "✅");
        assert_eq!(status_text(&UploadPhase::Complete, 100), "Redirecting...");
        assert_eq!(status_text(&UploadPhase::Delivered, 100), "Redirecting...");
    }

    #[test]
    fn test_failed_status() {
        let phase = UploadPhase::Failed("Failed to read file: boom".to_string());
        assert_eq!(status_icon(&phase, 0), "⚠️");
        assert_eq!(status_text(&phase, 0), "Failed to read file: boom");
    }
}
