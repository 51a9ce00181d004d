//! The `#message` region showing the last mutation outcome.

#[cfg(test)]
#[path = "status_message_test.rs"]
mod status_message_test;

use leptos::prelude::*;

use crate::state::status::StatusState;

#[component]
pub fn StatusMessage() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    view! {
        <div id="message" class=move || status.with(StatusState::css_class) role="status">
            {move || status.with(|s| s.text().to_owned())}
        </div>
    }
}
