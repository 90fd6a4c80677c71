//! Upload widget state machine.
//!
//! ```text
//! Idle ──accept──▶ Encoding ──finish_encoding──▶ Progressing ──tick*──▶ Complete ──take_payload──▶ Delivered
//!                     │
//!                     └──fail_encoding──▶ Failed ──reset──▶ Idle
//! ```
//!
//! Every accepted file gets a new generation number. Async work
//! (encoding, timers) carries the generation it was started for, and
//! any call with an older generation is ignored, so a superseded upload
//! can never touch the state of the current one.

use crate::SelectedFile;

/// Phase of the current upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    /// No file accepted yet
    #[default]
    Idle,
    /// Reading and encoding the file
    Encoding,
    /// Simulated progress running
    Progressing,
    /// Progress reached 100, waiting for the redirect delay
    Complete,
    /// Payload handed to the completion callback
    Delivered,
    /// Reading or encoding failed
    Failed(String),
}

/// Result of a progress tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Progress moved to the given value, below 100
    Advanced(u8),
    /// Progress reached exactly 100
    Completed,
    /// Stale generation or not progressing
    Ignored,
}

/// State of one upload widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    file: Option<SelectedFile>,
    phase: UploadPhase,
    progress: u8,
    payload: Option<String>,
    dragging: bool,
    generation: u64,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    /// Simulated progress, 0..=100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether progress has reached 100.
    pub fn is_complete(&self) -> bool {
        self.progress >= 100
    }

    // =========================================================================
    // Drag feedback
    // =========================================================================

    /// Pointer hovering over the dropzone with a file.
    pub fn drag_over(&mut self, signed_in: bool) {
        if signed_in {
            self.dragging = true;
        }
    }

    /// Pointer left the dropzone.
    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    // =========================================================================
    // File acceptance
    // =========================================================================

    /// Accept a file from the picker.
    ///
    /// Returns the generation of the new upload, or `None` when the
    /// user is not signed in. Any upload in flight is superseded.
    pub fn accept(&mut self, signed_in: bool, file: SelectedFile) -> Option<u64> {
        if !signed_in {
            log::debug!("Ignoring {}: not signed in", file.name);
            return None;
        }

        if !matches!(self.phase, UploadPhase::Idle) {
            log::debug!(
                "Superseding upload #{} ({:?}) with {}",
                self.generation,
                self.phase,
                file.name
            );
        }

        self.generation += 1;
        self.progress = 0;
        self.payload = None;
        self.phase = UploadPhase::Encoding;
        log::debug!("Upload #{}: accepted {} ({} bytes)", self.generation, file.name, file.size);
        self.file = Some(file);
        Some(self.generation)
    }

    /// Accept a dropped file. Non-image types are ignored.
    pub fn accept_drop(&mut self, signed_in: bool, file: SelectedFile) -> Option<u64> {
        self.dragging = false;

        if !file.is_image() {
            log::debug!("Ignoring dropped {}: type {:?} is not an image", file.name, file.mime_type);
            return None;
        }

        self.accept(signed_in, file)
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Store the encoded payload and start progressing.
    pub fn finish_encoding(&mut self, generation: u64, payload: String) -> bool {
        if !self.is_current(generation, &UploadPhase::Encoding) {
            return false;
        }

        log::debug!("Upload #{}: encoded {} chars", generation, payload.len());
        self.payload = Some(payload);
        self.phase = UploadPhase::Progressing;
        true
    }

    /// Record an encoding failure.
    pub fn fail_encoding(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if !self.is_current(generation, &UploadPhase::Encoding) {
            return false;
        }

        let message = message.into();
        log::debug!("Upload #{}: encoding failed: {}", generation, message);
        self.phase = UploadPhase::Failed(message);
        true
    }

    // =========================================================================
    // Progress
    // =========================================================================

    /// Advance the simulated progress by `increment` points.
    ///
    /// The final tick clamps to exactly 100 and moves to `Complete`.
    pub fn tick(&mut self, generation: u64, increment: u8) -> Tick {
        if !self.is_current(generation, &UploadPhase::Progressing) {
            return Tick::Ignored;
        }

        let next = self.progress.saturating_add(increment);
        if next >= 100 {
            self.progress = 100;
            self.phase = UploadPhase::Complete;
            log::debug!("Upload #{}: progress 100, complete", generation);
            Tick::Completed
        } else {
            self.progress = next;
            log::debug!("Upload #{}: progress {}", generation, next);
            Tick::Advanced(next)
        }
    }

    /// Hand out the payload once the upload is complete.
    ///
    /// Yields `Some` at most once per generation.
    pub fn take_payload(&mut self, generation: u64) -> Option<String> {
        if !self.is_current(generation, &UploadPhase::Complete) {
            return None;
        }

        self.phase = UploadPhase::Delivered;
        log::debug!("Upload #{}: delivered", generation);
        self.payload.take()
    }

    /// Back to the dropzone.
    pub fn reset(&mut self) {
        log::debug!("Upload #{}: reset from {:?}", self.generation, self.phase);
        // Bump so any late callback of the dropped upload is ignored.
        self.generation += 1;
        self.file = None;
        self.phase = UploadPhase::Idle;
        self.progress = 0;
        self.payload = None;
        self.dragging = false;
    }

    fn is_current(&self, generation: u64, phase: &UploadPhase) -> bool {
        generation == self.generation && &self.phase == phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png() -> SelectedFile {
        SelectedFile::new("plan.png", "image/png", 2048)
    }

    /// Accept, encode and tick until complete, returning every progress value.
    fn run_to_completion(state: &mut UploadState, increment: u8) -> Vec<u8> {
        let generation = state.accept(true, png()).unwrap();
        assert!(state.finish_encoding(generation, "data:image/png;base64,AAAA".to_string()));

        let mut values = Vec::new();
        loop {
            match state.tick(generation, increment) {
                Tick::Advanced(value) => values.push(value),
                Tick::Completed => {
                    values.push(state.progress());
                    break;
                }
                Tick::Ignored => panic!("tick ignored while progressing"),
            }
        }
        values
    }

    #[test]
    fn test_initial_state() {
        let state = UploadState::new();
        assert_eq!(state.phase(), &UploadPhase::Idle);
        assert!(state.file().is_none());
        assert_eq!(state.progress(), 0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_signed_out_accept_is_noop() {
        let mut state = UploadState::new();
        assert_eq!(state.accept(false, png()), None);
        assert_eq!(state.accept_drop(false, png()), None);
        assert!(state.file().is_none());
        assert_eq!(state.progress(), 0);
        assert_eq!(state.phase(), &UploadPhase::Idle);
    }

    #[test]
    fn test_signed_out_drag_over_is_noop() {
        let mut state = UploadState::new();
        state.drag_over(false);
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_drag_feedback() {
        let mut state = UploadState::new();
        state.drag_over(true);
        assert!(state.is_dragging());
        state.drag_leave();
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_drop_clears_dragging() {
        let mut state = UploadState::new();
        state.drag_over(true);
        state.accept_drop(true, png());
        assert!(!state.is_dragging());

        state.reset();
        state.drag_over(true);
        state.accept_drop(false, png());
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_drop_non_image_is_ignored() {
        let mut state = UploadState::new();
        let text = SelectedFile::new("notes.txt", "text/plain", 12);
        assert_eq!(state.accept_drop(true, text), None);
        assert!(state.file().is_none());
        assert_eq!(state.phase(), &UploadPhase::Idle);
    }

    #[test]
    fn test_picker_does_not_check_mime() {
        let mut state = UploadState::new();
        let untyped = SelectedFile::new("plan.png", "", 12);
        assert!(state.accept(true, untyped).is_some());
        assert_eq!(state.phase(), &UploadPhase::Encoding);
    }

    #[test]
    fn test_accept_enters_encoding() {
        let mut state = UploadState::new();
        let generation = state.accept_drop(true, png()).unwrap();
        assert_eq!(generation, state.generation());
        assert_eq!(state.phase(), &UploadPhase::Encoding);
        assert_eq!(state.file().map(|f| f.name.as_str()), Some("plan.png"));
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn test_no_ticks_before_encoding_finishes() {
        let mut state = UploadState::new();
        let generation = state.accept(true, png()).unwrap();
        assert_eq!(state.tick(generation, 10), Tick::Ignored);
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn test_even_increment_sequence() {
        let mut state = UploadState::new();
        let values = run_to_completion(&mut state, 10);
        assert_eq!(values, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(state.phase(), &UploadPhase::Complete);
    }

    #[test]
    fn test_uneven_increment_clamps_to_100() {
        let mut state = UploadState::new();
        let values = run_to_completion(&mut state, 15);
        assert_eq!(values, vec![15, 30, 45, 60, 75, 90, 100]);
    }

    #[test]
    fn test_progress_monotonic_and_bounded() {
        for increment in 1..=100u8 {
            let mut state = UploadState::new();
            let values = run_to_completion(&mut state, increment);
            assert!(values.windows(2).all(|w| w[0] < w[1]), "increment {}", increment);
            assert!(values.iter().all(|v| *v <= 100));
            assert_eq!(values.last(), Some(&100));
        }
    }

    #[test]
    fn test_no_ticks_after_complete() {
        let mut state = UploadState::new();
        run_to_completion(&mut state, 50);
        let generation = state.generation();
        assert_eq!(state.tick(generation, 50), Tick::Ignored);
        assert_eq!(state.progress(), 100);
    }

    #[test]
    fn test_payload_delivered_exactly_once() {
        let mut state = UploadState::new();
        run_to_completion(&mut state, 25);
        let generation = state.generation();

        let payload = state.take_payload(generation);
        assert_eq!(payload.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(state.phase(), &UploadPhase::Delivered);
        assert_eq!(state.take_payload(generation), None);
        // The completed card stays visible.
        assert!(state.file().is_some());
        assert!(state.is_complete());
    }

    #[test]
    fn test_payload_not_available_before_complete() {
        let mut state = UploadState::new();
        let generation = state.accept(true, png()).unwrap();
        state.finish_encoding(generation, "data:,".to_string());
        state.tick(generation, 10);
        assert_eq!(state.take_payload(generation), None);
    }

    #[test]
    fn test_encoding_failure() {
        let mut state = UploadState::new();
        let generation = state.accept(true, png()).unwrap();
        assert!(state.fail_encoding(generation, "NotReadableError"));
        assert_eq!(state.phase(), &UploadPhase::Failed("NotReadableError".to_string()));
        assert_eq!(state.tick(generation, 10), Tick::Ignored);

        state.reset();
        assert_eq!(state.phase(), &UploadPhase::Idle);
        assert!(state.file().is_none());
    }

    #[test]
    fn test_failed_upload_is_never_complete() {
        let mut state = UploadState::new();
        let generation = state.accept(true, png()).unwrap();
        state.fail_encoding(generation, "NotReadableError");
        assert!(!state.is_complete());
        assert_eq!(state.progress(), 0);

        // A failure after some progress cannot happen: ticks need Progressing.
        assert_eq!(state.tick(generation, 100), Tick::Ignored);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_new_file_supersedes_running_upload() {
        let mut state = UploadState::new();
        let first = state.accept(true, png()).unwrap();
        state.finish_encoding(first, "data:first".to_string());
        state.tick(first, 40);

        let second = state
            .accept(true, SelectedFile::new("other.jpg", "image/jpeg", 1))
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(state.progress(), 0);
        assert_eq!(state.phase(), &UploadPhase::Encoding);

        // Late callbacks of the first upload are ignored.
        assert_eq!(state.tick(first, 40), Tick::Ignored);
        assert!(!state.finish_encoding(first, "data:first".to_string()));
        assert!(!state.fail_encoding(first, "late"));
        assert_eq!(state.take_payload(first), None);

        assert!(state.finish_encoding(second, "data:second".to_string()));
        assert_eq!(state.tick(second, 100), Tick::Completed);
        assert_eq!(state.take_payload(second).as_deref(), Some("data:second"));
    }

    #[test]
    fn test_reset_invalidates_in_flight_work() {
        let mut state = UploadState::new();
        let generation = state.accept(true, png()).unwrap();
        state.reset();
        assert!(!state.finish_encoding(generation, "data:late".to_string()));
        assert_eq!(state.phase(), &UploadPhase::Idle);
    }
}
