//! Generation requests and deterministic reply templates
//!
//! The interaction layer talks to a generative backend through a typed
//! request. [`GenerationRequest::prompt`] renders the instruction text a
//! real backend would receive; [`canned_reply`] renders the deterministic
//! artifact the fixed-latency mock substitutes for it. Both live here so a
//! backend swap touches no state machine.

use crate::util::truncate_chars;

/// Number of message characters quoted back in an acknowledgment.
pub const PREVIEW_CHARS: usize = 30;

/// A truncated preview of the sender's message: the first
/// [`PREVIEW_CHARS`] characters, ellipsis-suffixed when longer.
pub fn message_preview(message: &str) -> String {
    let head = truncate_chars(message, PREVIEW_CHARS);
    if head.len() < message.len() {
        format!("{head}...")
    } else {
        head.to_string()
    }
}

/// A request for generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    /// A short acknowledgment reply to a contact-form sender.
    ContactAcknowledgment { sender: String, preview: String },
    /// A portfolio project suggestion, optionally informed by the
    /// owner's skills.
    ProjectIdea { skills: Vec<String> },
}

impl GenerationRequest {
    /// Build an acknowledgment request from the raw form fields.
    pub fn acknowledgment(sender: impl Into<String>, message: &str) -> Self {
        Self::ContactAcknowledgment {
            sender: sender.into(),
            preview: message_preview(message),
        }
    }

    pub fn project_idea(skills: Vec<String>) -> Self {
        Self::ProjectIdea { skills }
    }

    /// The instruction text a real generative backend would receive.
    pub fn prompt(&self) -> String {
        match self {
            Self::ContactAcknowledgment { sender, preview } => format!(
                "Act as a professional portfolio owner. Draft a short, courteous, \
                 and enthusiastic acknowledgment response to a user named {sender} \
                 who just submitted a contact form message about: {preview}. The \
                 response should promise a detailed follow-up within one business day."
            ),
            Self::ProjectIdea { skills } => {
                if skills.is_empty() {
                    "Act as a creative technical mentor. Suggest one concrete portfolio \
                     project idea for a front-end developer, naming the stack and one \
                     distinguishing feature."
                        .to_string()
                } else {
                    format!(
                        "Act as a creative technical mentor. Suggest one concrete portfolio \
                         project idea for a front-end developer skilled in {}, naming the \
                         stack and one distinguishing feature.",
                        skills.join(", ")
                    )
                }
            }
        }
    }
}

/// The deterministic text the fixed-latency mock produces for a request.
pub fn canned_reply(request: &GenerationRequest) -> String {
    match request {
        GenerationRequest::ContactAcknowledgment { sender, preview } => format!(
            "Hello {sender}, thank you so much for reaching out! I've received your \
             message regarding: \"{preview}\". I'm very excited to learn more. I will \
             review your inquiry in detail and get back to you with a comprehensive \
             response within one business day. Talk soon!"
        ),
        GenerationRequest::ProjectIdea { .. } => {
            "Generated Project Idea: Develop an AI-powered personal reading list \
             organizer built with Next.js, Firestore for persistence, and a clean, \
             accessible design, focusing on dynamic list sorting by user-defined tags."
                .to_string()
        }
    }
}
