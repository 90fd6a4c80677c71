//! Floor plan upload widget with drag & drop support.
//!
//! Handles file selection (picker or drop), encoding to a data URL,
//! the simulated progress and the delayed completion callback.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::UploadStatus;
use crate::services::{encode_file, run_progress, ProgressSchedule, UploadTask};
use crate::state::UploadState;
use crate::{SelectedFile, UploadConfig, ACCEPTED_EXTENSIONS, MAX_FILE_SIZE};

#[component]
pub fn UploadWidget(
    /// Sign-in flag; every interaction is ignored while false
    #[prop(into)]
    is_signed_in: Signal<bool>,
    /// Timings of the simulated upload
    #[prop(optional)]
    config: Option<UploadConfig>,
    /// Receives the data URL once the simulated upload completes
    #[prop(optional, into)]
    on_complete: Option<Callback<String>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = create_rw_signal(UploadState::new());
    let task = store_value(None::<UploadTask>);

    // Drop the running task with the widget; this clears its timers.
    on_cleanup(move || {
        task.try_update_value(|t| t.take());
    });

    let process_file = move |file: File, dropped: bool| {
        let selected = SelectedFile::from_web_file(&file);
        let signed_in = is_signed_in.get_untracked();

        let accepted = state
            .try_update(|s| {
                if dropped {
                    s.accept_drop(signed_in, selected)
                } else {
                    s.accept(signed_in, selected)
                }
            })
            .flatten();
        let Some(generation) = accepted else {
            return;
        };

        if file.size() as u64 > MAX_FILE_SIZE {
            log::warn!(
                "{} is {} bytes, above the advertised {} byte limit",
                file.name(),
                file.size(),
                MAX_FILE_SIZE
            );
        }

        // Replacing the handle aborts the previous upload.
        let upload = run_upload(file, generation, config, state, on_complete);
        task.set_value(Some(UploadTask::spawn(upload)));
    };

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        if !state.with_untracked(|s| s.is_dragging()) {
            state.update(|s| s.drag_over(is_signed_in.get_untracked()));
        }
    };

    let on_drag_leave = move |_: ev::DragEvent| {
        if state.with_untracked(|s| s.is_dragging()) {
            state.update(|s| s.drag_leave());
        }
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        let dropped = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));

        match dropped {
            Some(file) => process_file(file, true),
            None => state.update(|s| s.drag_leave()),
        }
    };

    let on_file_change = move |ev: Event| {
        if !is_signed_in.get_untracked() {
            return;
        }

        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            process_file(file, false);
        }
        // Let the same file be picked again after a reset.
        input.set_value("");
    };

    let on_reset = Callback::new(move |_: ()| {
        task.set_value(None);
        state.update(|s| s.reset());
    });

    let dropzone = move || {
        view! {
            <div
                class="dropzone"
                class:is-dragging=move || state.with(|s| s.is_dragging())
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <input
                    type="file"
                    class="drop-input"
                    accept=ACCEPTED_EXTENSIONS
                    disabled=move || !is_signed_in.get()
                    on:change=on_file_change
                />

                <div class="drop-content">
                    <div class="drop-icon">"📤"</div>
                    <p>
                        {move || if is_signed_in.get() {
                            "Click to upload or just drag and drop"
                        } else {
                            "Sign in or sign up to upload"
                        }}
                    </p>
                    <p class="help">{format!("Maximum file size {}MB.", MAX_FILE_SIZE / (1024 * 1024))}</p>
                </div>
            </div>
        }
    };

    view! {
        <div class="upload">
            <Show
                when=move || state.with(|s| s.file().is_some())
                fallback=dropzone
            >
                <UploadStatus state=state.read_only() on_reset=on_reset/>
            </Show>
        </div>
    }
}

/// Encode the file, run the simulated progress and deliver the payload.
async fn run_upload(
    file: File,
    generation: u64,
    config: UploadConfig,
    state: RwSignal<UploadState>,
    on_complete: Option<Callback<String>>,
) {
    match encode_file(&file).await {
        Ok(payload) => {
            let started = state
                .try_update(|s| s.finish_encoding(generation, payload))
                .unwrap_or(false);
            if !started {
                return;
            }
        }
        Err(e) => {
            log::warn!("Upload #{} of {}: {}", generation, file.name(), e);
            state.try_update(|s| s.fail_encoding(generation, e.to_string()));
            return;
        }
    }

    log::debug!(
        "Upload #{}: completing in {} ms",
        generation,
        ProgressSchedule::new(&config).complete_at_ms
    );

    let increment = config.progress_increment;
    let finished = run_progress(config, TimeoutFuture::new, || {
        state.try_update(|s| s.tick(generation, increment))
    })
    .await;
    if !finished {
        return;
    }

    let Some(payload) = state.try_update(|s| s.take_payload(generation)).flatten() else {
        return;
    };
    log::info!("✅ Upload of {} complete", file.name());

    if let Some(on_complete) = on_complete {
        on_complete.call(payload);
    }
}
