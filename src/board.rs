//! Activity board controller: loading, signup and participant removal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call into [`ActivityBoard`] from event handlers and spawn the
//! returned futures. Each flow suspends only at its network call and then
//! writes the outcome into the page state in one synchronous update per
//! region.
//!
//! The browser is reached through two seams so every flow runs natively in
//! tests: [`StateSink`] (where state lives) and [`Host`] (confirmation
//! prompts and timers).
//!
//! CONCURRENCY
//! ===========
//! Independently triggered flows may interleave freely. Nothing is
//! deduplicated or debounced; overlapping refreshes are reconciled by fetch
//! sequence numbers in `ActivitiesState`, and overlapping status messages by
//! generation numbers in `StatusState`.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::{GetUntracked, Update};

use crate::net::api::ActivityApi;
use crate::net::error::ApiError;
use crate::state::activities::ActivitiesState;
use crate::state::board::BoardSignals;
use crate::state::signup::SignupForm;
use crate::state::status::{StatusMessage, StatusState};

pub const SIGNUP_SUCCESS_FALLBACK: &str = "Signed up successfully";
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const REMOVE_SUCCESS_FALLBACK: &str = "Participant removed";
pub const REMOVE_REJECTED_FALLBACK: &str = "Failed to remove participant";
pub const REMOVE_FAILED: &str = "Failed to remove participant. Please try again.";

/// Where the page state lives.
///
/// Every method returns `None` when the state is gone (the owning view was
/// disposed), in which case the flow stops quietly.
pub trait StateSink: Clone + 'static {
    fn activities<R>(&self, update: impl FnOnce(&mut ActivitiesState) -> R) -> Option<R>;

    fn status<R>(&self, update: impl FnOnce(&mut StatusState) -> R) -> Option<R>;

    fn signup<R>(&self, update: impl FnOnce(&mut SignupForm) -> R) -> Option<R>;

    /// Current form contents, read without subscribing.
    fn signup_form(&self) -> Option<SignupForm>;
}

impl StateSink for BoardSignals {
    fn activities<R>(&self, update: impl FnOnce(&mut ActivitiesState) -> R) -> Option<R> {
        self.activities.try_update(update)
    }

    fn status<R>(&self, update: impl FnOnce(&mut StatusState) -> R) -> Option<R> {
        self.status.try_update(update)
    }

    fn signup<R>(&self, update: impl FnOnce(&mut SignupForm) -> R) -> Option<R> {
        self.signup.try_update(update)
    }

    fn signup_form(&self) -> Option<SignupForm> {
        self.signup.try_get_untracked()
    }
}

/// Browser services the flows need besides the network.
pub trait Host: Clone + 'static {
    /// Ask the user a yes/no question. `false` means declined.
    fn confirm(&self, prompt: &str) -> bool;

    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Question asked before removing a participant.
pub fn removal_prompt(activity: &str, email: &str) -> String {
    format!("Remove {email} from {activity}?")
}

fn failure_text(err: &ApiError, rejected_fallback: &str, failed: &str) -> String {
    match err {
        ApiError::Rejected { .. } => err.detail().unwrap_or(rejected_fallback).to_owned(),
        ApiError::Network(_) | ApiError::Parse(_) => failed.to_owned(),
    }
}

/// Owns the flows over one page's state.
#[derive(Clone)]
pub struct ActivityBoard<S: StateSink, H: Host> {
    state: S,
    api: Arc<dyn ActivityApi>,
    host: H,
    message_timeout: Duration,
}

impl<S: StateSink, H: Host> ActivityBoard<S, H> {
    pub fn new(state: S, api: Arc<dyn ActivityApi>, host: H, message_timeout: Duration) -> Self {
        Self { state, api, host, message_timeout }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the catalog and replace the list (and options on success).
    pub async fn refresh(&self) {
        let Some(seq) = self.state.activities(ActivitiesState::begin_fetch) else {
            return;
        };
        let result = self.api.fetch_activities().await;
        match &result {
            Ok(catalog) => log::info!("fetched {} activities", catalog.len()),
            Err(err) => log::error!("error fetching activities: {err}"),
        }
        if self.state.activities(move |a| a.finish_fetch(seq, result)) == Some(false) {
            log::warn!("discarded stale activities response #{seq}");
        }
    }

    /// Submit whatever the signup form currently holds.
    pub async fn submit_signup_form(&self) {
        let Some((activity, email)) = self.state.signup_form().and_then(|form| form.submission()) else {
            log::debug!("signup form incomplete; not submitting");
            return;
        };
        self.handle_signup(&activity, &email).await;
    }

    /// Register `email` for `activity`.
    ///
    /// Success clears the form, announces the server message and re-fetches.
    /// Failure announces the server detail (or a generic text) and keeps the
    /// form as typed.
    pub async fn handle_signup(&self, activity: &str, email: &str) {
        if activity.is_empty() || email.is_empty() {
            return;
        }
        log::debug!("signing up {email} for {activity}");
        match self.api.signup(activity, email).await {
            Ok(reply) => {
                let text = reply.message.unwrap_or_else(|| SIGNUP_SUCCESS_FALLBACK.to_owned());
                self.state.signup(SignupForm::reset);
                self.announce(StatusMessage::success(text));
                self.refresh().await;
            }
            Err(err) => {
                log::error!("error signing up {email} for {activity}: {err}");
                self.announce(StatusMessage::error(failure_text(
                    &err,
                    SIGNUP_REJECTED_FALLBACK,
                    SIGNUP_FAILED,
                )));
            }
        }
    }

    /// Remove `email` from `activity` after the user confirms.
    ///
    /// Declining sends nothing and leaves the status region untouched.
    pub async fn handle_remove_participant(&self, activity: &str, email: &str) {
        if activity.is_empty() || email.is_empty() {
            return;
        }
        if !self.host.confirm(&removal_prompt(activity, email)) {
            log::debug!("removal of {email} from {activity} declined");
            return;
        }
        match self.api.remove_participant(activity, email).await {
            Ok(reply) => {
                let text = reply.message.unwrap_or_else(|| REMOVE_SUCCESS_FALLBACK.to_owned());
                self.announce(StatusMessage::success(text));
                self.refresh().await;
            }
            Err(err) => {
                log::error!("error removing {email} from {activity}: {err}");
                self.announce(StatusMessage::error(failure_text(
                    &err,
                    REMOVE_REJECTED_FALLBACK,
                    REMOVE_FAILED,
                )));
            }
        }
    }

    /// Show `message` and schedule it to hide after the configured timeout.
    fn announce(&self, message: StatusMessage) {
        let Some(generation) = self.state.status(|s| s.show(message)) else {
            return;
        };
        let state = self.state.clone();
        self.host.schedule(
            self.message_timeout,
            Box::new(move || {
                state.status(|s| s.expire(generation));
            }),
        );
    }
}
