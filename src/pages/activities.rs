//! Activities page: list on one side, signup form and status on the other.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It triggers the initial fetch on mount and turns
//! component callbacks into controller tasks via `spawn_local`.

use leptos::prelude::*;

use crate::app::PageBoard;
use crate::components::activity_list::ActivityList;
use crate::components::signup_form::SignupForm;
use crate::components::status_message::StatusMessage;

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let board = expect_context::<PageBoard>();

    #[cfg(feature = "csr")]
    {
        let board = board.clone();
        leptos::task::spawn_local(async move { board.refresh().await });
    }

    let on_remove = Callback::new({
        let board = board.clone();
        move |(activity, email): (String, String)| {
            #[cfg(feature = "csr")]
            {
                let board = board.clone();
                leptos::task::spawn_local(async move {
                    board.handle_remove_participant(&activity, &email).await;
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&board, activity, email);
            }
        }
    });

    let on_submit = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let board = board.clone();
            leptos::task::spawn_local(async move { board.submit_signup_form().await });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &board;
        }
    });

    view! {
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList on_remove=on_remove/>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm on_submit=on_submit/>
                <StatusMessage/>
            </section>
        </main>
    }
}
