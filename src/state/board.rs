//! Reactive handles for the activities page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each region gets its own `RwSignal`, provided separately as context, so
//! typing in the signup form does not re-render the activity cards. The
//! controller in `crate::board` writes all three; components read the ones
//! they render and write only the form fields they own.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;

use super::activities::ActivitiesState;
use super::signup::SignupForm;
use super::status::StatusState;

#[derive(Clone, Copy, Debug)]
pub struct BoardSignals {
    pub activities: RwSignal<ActivitiesState>,
    pub signup: RwSignal<SignupForm>,
    pub status: RwSignal<StatusState>,
}

impl BoardSignals {
    /// Create the page signals and provide each one as context.
    pub fn provide() -> Self {
        let signals = Self {
            activities: RwSignal::new(ActivitiesState::default()),
            signup: RwSignal::new(SignupForm::default()),
            status: RwSignal::new(StatusState::default()),
        };
        provide_context(signals.activities);
        provide_context(signals.signup);
        provide_context(signals.status);
        signals
    }
}
