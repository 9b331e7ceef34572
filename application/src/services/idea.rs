//! Project idea generator slice
//!
//! One artifact at a time: `generate` clears the previous idea, runs the
//! generation in the background, and installs the result. The pending
//! flag gates repeat invocation at the slice level in addition to the
//! disabled trigger in the UI.

use crate::ports::content_generator::ContentGenerator;
use crate::services::toast::ToastNotifier;
use folio_domain::GenerationRequest;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::warn;

struct IdeaState {
    idea: String,
    generating: bool,
}

/// The project idea state slice.
pub struct IdeaService {
    state: Arc<Mutex<IdeaState>>,
    toasts: Arc<ToastNotifier>,
    generator: Arc<dyn ContentGenerator>,
    skills: Vec<String>,
    cancel: CancellationToken,
}

impl IdeaService {
    pub fn new(toasts: Arc<ToastNotifier>, generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            state: Arc::new(Mutex::new(IdeaState {
                idea: String::new(),
                generating: false,
            })),
            toasts,
            generator,
            skills: Vec::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Seed the generation prompt with the portfolio owner's skills.
    pub fn with_skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    /// Start a generation. Clears any prior artifact immediately; rejected
    /// while one is already in flight.
    pub fn generate(&self) {
        {
            let mut state = self.state.lock().unwrap();
            if state.generating {
                warn!("idea generation rejected: already pending");
                return;
            }
            state.generating = true;
            state.idea.clear();
        }

        let request = GenerationRequest::project_idea(self.skills.clone());
        let state = Arc::clone(&self.state);
        let toasts = Arc::clone(&self.toasts);
        let generator = Arc::clone(&self.generator);
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = cancel.cancelled() => return,
                result = generator.generate(&request) => result,
            };
            let mut state = state.lock().unwrap();
            state.generating = false;
            match result {
                Ok(text) => state.idea = text,
                Err(e) => {
                    warn!("idea generation failed: {e}");
                    drop(state);
                    toasts.error("Could not generate an idea. Please try again.");
                }
            }
        });
    }

    /// The current artifact, empty when none.
    pub fn idea(&self) -> String {
        self.state.lock().unwrap().idea.clone()
    }

    /// Whether a generation is in flight. The rendering host disables the
    /// trigger while this is set.
    pub fn is_generating(&self) -> bool {
        self.state.lock().unwrap().generating
    }

    /// Cancel any in-flight generation so nothing mutates the slice after
    /// unmount.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for IdeaService {
    fn drop(&mut self) {
        self.teardown();
    }
}
