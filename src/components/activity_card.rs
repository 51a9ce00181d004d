//! Card for one activity with its participant roster.
//!
//! DESIGN
//! ======
//! Backend text arrives pre-escaped in [`ActivityCardView`] and is inserted
//! with `inner_html`. Removal buttons capture the raw activity name and
//! participant email when the card is built, so a click never re-reads the
//! DOM to find out what it acts on.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;

use crate::state::activities::{ActivityCardView, ParticipantRow};

fn participants_section_class(has_participants: bool) -> &'static str {
    if has_participants {
        "participants-section"
    } else {
        "participants-section none"
    }
}

/// A single activity card.
///
/// `on_remove` receives `(activity, email)` for the clicked participant.
#[component]
pub fn ActivityCard(card: ActivityCardView, on_remove: Callback<(String, String)>) -> impl IntoView {
    let availability = card.availability_text();
    let ActivityCardView { name, name_html, description_html, schedule_html, participants, .. } = card;
    let section_class = participants_section_class(!participants.is_empty());

    let roster = if participants.is_empty() {
        view! { <p class="muted">"No participants yet"</p> }.into_any()
    } else {
        let rows = participants
            .into_iter()
            .map(|row| view! { <ParticipantItem activity=name.clone() row=row on_remove=on_remove/> })
            .collect_view();
        view! { <ul class="participants-list">{rows}</ul> }.into_any()
    };

    view! {
        <div class="activity-card">
            <h4 inner_html=name_html></h4>
            <p inner_html=description_html></p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                <span inner_html=schedule_html></span>
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class=section_class aria-live="polite">
                <h5>"Participants"</h5>
                {roster}
            </div>
        </div>
    }
}

#[component]
fn ParticipantItem(activity: String, row: ParticipantRow, on_remove: Callback<(String, String)>) -> impl IntoView {
    let ParticipantRow { email, email_html } = row;
    let target = (activity.clone(), email.clone());

    view! {
        <li>
            <span inner_html=email_html></span>
            " "
            <button
                class="delete-participant"
                data-activity=activity
                data-email=email
                aria-label="Remove participant"
                on:click=move |_| on_remove.run(target.clone())
            >
                "✖"
            </button>
        </li>
    }
}
