//! The `#activities-list` region: loading text, failure text or cards.

#[cfg(test)]
#[path = "activity_list_test.rs"]
mod activity_list_test;

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::state::activities::{ActivitiesState, ListDisplay};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// Activity list re-rendered from the latest applied catalog.
#[component]
pub fn ActivityList(on_remove: Callback<(String, String)>) -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();

    view! {
        <div id="activities-list">
            {move || {
                activities
                    .with(|a| match &a.list {
                        ListDisplay::Loading => view! { <p>{LOADING_TEXT}</p> }.into_any(),
                        ListDisplay::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_any(),
                        ListDisplay::Loaded(_) => a
                            .cards()
                            .into_iter()
                            .map(|card| view! { <ActivityCard card=card on_remove=on_remove/> })
                            .collect_view()
                            .into_any(),
                    })
            }}
        </div>
    }
}
