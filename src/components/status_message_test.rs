use super::*;
use crate::state::status::StatusMessage as Outcome;

fn render(status: StatusState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(status));
        view! { <StatusMessage/> }.to_html()
    })
}

#[test]
fn hidden_until_something_is_shown() {
    let html = render(StatusState::default());
    assert!(html.contains("id=\"message\""), "{html}");
    assert!(html.contains("class=\"hidden\""), "{html}");
}

#[test]
fn visible_message_carries_kind_class_and_text() {
    let mut status = StatusState::default();
    status.show(Outcome::error("Already signed up"));

    let html = render(status);

    assert!(html.contains("class=\"error\""), "{html}");
    assert!(html.contains("Already signed up"), "{html}");
}

#[test]
fn expired_message_keeps_kind_while_hidden() {
    let mut status = StatusState::default();
    let generation = status.show(Outcome::success("Signed up!"));
    status.expire(generation);

    let html = render(status);

    assert!(html.contains("class=\"success hidden\""), "{html}");
}
