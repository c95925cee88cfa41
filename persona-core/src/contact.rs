//! Contact form acknowledgement. Nothing is sent; the submit button shows a
//! confirmation for a fixed delay and the form is then cleared.
use crate::config::Confirmation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedbackState {
    Idle,
    Confirming {
        original_label: String,
        pending: usize,
    },
}

/// What the submit control should look like right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonLook {
    pub label: String,
    /// `None` clears the inline background.
    pub background: Option<String>,
}

/// Produced when a reset delay elapses: restore the button to `look` and
/// clear the form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormReset {
    pub look: ButtonLook,
}

#[derive(Clone, Debug)]
pub struct SubmitFeedback {
    confirmation: Confirmation,
    state: FeedbackState,
}

impl SubmitFeedback {
    #[must_use]
    pub const fn new(confirmation: Confirmation) -> Self {
        Self {
            confirmation,
            state: FeedbackState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &FeedbackState {
        &self.state
    }

    /// Form submitted while the button reads `current_label`.
    ///
    /// A submit during an ongoing confirmation keeps the label captured by the
    /// first one, so the button never gets stuck on the confirmation text.
    pub fn submit(&mut self, current_label: &str) -> ButtonLook {
        self.state = match std::mem::replace(&mut self.state, FeedbackState::Idle) {
            FeedbackState::Idle => FeedbackState::Confirming {
                original_label: current_label.to_string(),
                pending: 1,
            },
            FeedbackState::Confirming {
                original_label,
                pending,
            } => FeedbackState::Confirming {
                original_label,
                pending: pending + 1,
            },
        };
        ButtonLook {
            label: self.confirmation.label.clone(),
            background: Some(self.confirmation.color.clone()),
        }
    }

    /// One reset delay elapsed. Every elapsed delay restores the original
    /// label and clears the form; the state returns to idle after the last.
    pub fn elapse(&mut self) -> Option<FormReset> {
        let FeedbackState::Confirming {
            original_label,
            pending,
        } = &mut self.state
        else {
            return None;
        };
        let reset = FormReset {
            look: ButtonLook {
                label: original_label.clone(),
                background: None,
            },
        };
        *pending = pending.saturating_sub(1);
        if *pending == 0 {
            self.state = FeedbackState::Idle;
        }
        Some(reset)
    }
}
