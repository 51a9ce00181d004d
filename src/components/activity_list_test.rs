use super::*;
use crate::net::error::ApiError;
use crate::net::types::{Activity, ActivityCatalog};

fn render(state: ActivitiesState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(state));
        let on_remove = Callback::new(|_: (String, String)| {});
        view! { <ActivityList on_remove=on_remove/> }.to_html()
    })
}

fn finished(result: Result<ActivityCatalog, ApiError>) -> ActivitiesState {
    let mut state = ActivitiesState::default();
    let seq = state.begin_fetch();
    state.finish_fetch(seq, result);
    state
}

#[test]
fn shows_loading_text_before_first_fetch() {
    let html = render(ActivitiesState::default());
    assert!(html.contains("id=\"activities-list\""), "{html}");
    assert!(html.contains(LOADING_TEXT), "{html}");
    assert!(!html.contains("activity-card"), "{html}");
}

#[test]
fn shows_failure_text_when_fetch_failed() {
    let html = render(finished(Err(ApiError::Network("offline".to_owned()))));
    assert!(html.contains(LOAD_FAILED_TEXT), "{html}");
    assert!(!html.contains(LOADING_TEXT), "{html}");
}

#[test]
fn renders_one_card_per_activity_in_catalog_order() {
    let activity = |max| Activity {
        description: "d".to_owned(),
        schedule: "s".to_owned(),
        max_participants: max,
        participants: Vec::new(),
    };
    let catalog: ActivityCatalog =
        [("Programming Class".to_owned(), activity(20)), ("Art Club".to_owned(), activity(15))]
            .into_iter()
            .collect();

    let html = render(finished(Ok(catalog)));

    assert_eq!(html.matches("class=\"activity-card\"").count(), 2, "{html}");
    let programming = html.find("Programming Class").unwrap();
    let art = html.find("Art Club").unwrap();
    assert!(programming < art, "{html}");
    assert!(!html.contains(LOADING_TEXT), "{html}");
}
