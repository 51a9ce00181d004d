//! Root application component and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::board::ActivityBoard;
use crate::config::BoardConfig;
use crate::net::api::{ActivityApi, HttpActivityApi};
use crate::pages::activities::ActivitiesPage;
use crate::state::board::BoardSignals;
use crate::util::browser::BrowserHost;

/// Controller type provided to the page via context.
pub type PageBoard = ActivityBoard<BoardSignals, BrowserHost>;

/// Root application component.
///
/// Owns the page signals for its whole lifetime and provides them, together
/// with the controller built from `config`, to every child component.
#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    provide_meta_context();

    let state = BoardSignals::provide();
    let api: Arc<dyn ActivityApi> = Arc::new(HttpActivityApi::new(config.api_base.clone()));
    let board: PageBoard = ActivityBoard::new(state, api, BrowserHost, config.message_timeout());

    provide_context(board);

    view! {
        <Title text="Mergington High School Activities"/>

        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <ActivitiesPage/>
    }
}
