use super::*;

fn activity(max: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "Learn strategies".to_owned(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_owned(),
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

fn catalog(entries: &[(&str, Activity)]) -> ActivityCatalog {
    entries
        .iter()
        .map(|(name, activity)| ((*name).to_owned(), activity.clone()))
        .collect()
}

// =============================================================
// Fetch application
// =============================================================

#[test]
fn starts_loading_with_no_options() {
    let state = ActivitiesState::default();
    assert_eq!(state.list, ListDisplay::Loading);
    assert!(state.options.is_empty());
    assert!(state.cards().is_empty());
}

#[test]
fn successful_fetch_replaces_list_and_options() {
    let mut state = ActivitiesState::default();
    let seq = state.begin_fetch();
    let data = catalog(&[("Chess Club", activity(12, &[])), ("Art Club", activity(15, &[]))]);
    assert!(state.finish_fetch(seq, Ok(data.clone())));
    assert_eq!(state.list, ListDisplay::Loaded(data));
    assert_eq!(state.options, vec!["Chess Club".to_owned(), "Art Club".to_owned()]);
}

#[test]
fn refetch_rebuilds_options_from_scratch() {
    let mut state = ActivitiesState::default();
    let seq = state.begin_fetch();
    state.finish_fetch(seq, Ok(catalog(&[("Old", activity(1, &[]))])));
    let seq = state.begin_fetch();
    state.finish_fetch(seq, Ok(catalog(&[("New", activity(1, &[]))])));
    assert_eq!(state.options, vec!["New".to_owned()]);
}

#[test]
fn failed_fetch_shows_failure_and_keeps_options() {
    let mut state = ActivitiesState::default();
    let seq = state.begin_fetch();
    state.finish_fetch(seq, Ok(catalog(&[("Chess Club", activity(12, &[]))])));

    let seq = state.begin_fetch();
    assert!(state.finish_fetch(seq, Err(ApiError::Network("offline".to_owned()))));
    assert_eq!(state.list, ListDisplay::Failed);
    assert_eq!(state.options, vec!["Chess Club".to_owned()]);
    assert!(state.cards().is_empty());
}

#[test]
fn stale_fetch_result_is_discarded() {
    let mut state = ActivitiesState::default();
    let older = state.begin_fetch();
    let newer = state.begin_fetch();

    let fresh = catalog(&[("Chess Club", activity(12, &["a@b.com"]))]);
    assert!(state.finish_fetch(newer, Ok(fresh.clone())));
    assert!(!state.finish_fetch(older, Ok(catalog(&[("Chess Club", activity(12, &[]))]))));
    assert_eq!(state.list, ListDisplay::Loaded(fresh));
}

#[test]
fn older_result_arriving_first_is_still_applied() {
    let mut state = ActivitiesState::default();
    let older = state.begin_fetch();
    let newer = state.begin_fetch();
    assert!(state.finish_fetch(older, Ok(catalog(&[("A", activity(1, &[]))]))));
    assert!(state.finish_fetch(newer, Ok(catalog(&[("B", activity(1, &[]))]))));
    assert_eq!(state.options, vec!["B".to_owned()]);
}

// =============================================================
// Card view models
// =============================================================

#[test]
fn cards_report_spots_left_for_every_activity() {
    let mut state = ActivitiesState::default();
    let data = catalog(&[
        ("Chess Club", activity(12, &["michael@mergington.edu", "daniel@mergington.edu"])),
        ("Gym Class", activity(30, &[])),
        ("Overbooked", activity(1, &["a@x.edu", "b@x.edu"])),
    ]);
    let seq = state.begin_fetch();
    state.finish_fetch(seq, Ok(data.clone()));

    let cards = state.cards();
    assert_eq!(cards.len(), 3);
    for (card, (name, activity)) in cards.iter().zip(data.iter()) {
        assert_eq!(&card.name, name);
        let expected = i64::from(activity.max_participants) - activity.participants.len() as i64;
        assert_eq!(card.spots_left, expected);
    }
    assert_eq!(cards[0].availability_text(), "10 spots left");
    assert_eq!(cards[2].availability_text(), "-1 spots left");
}

#[test]
fn card_escapes_all_interpolated_text() {
    let hostile = Activity {
        description: "<b>bold</b> & \"quoted\"".to_owned(),
        schedule: "Mon='x'".to_owned(),
        max_participants: 5,
        participants: vec!["<script>alert(1)</script>@x.edu".to_owned()],
    };
    let card = ActivityCardView::new("<img src=x onerror=alert(1)>", &hostile);

    let rendered = [
        card.name_html.as_str(),
        card.description_html.as_str(),
        card.schedule_html.as_str(),
        card.participants[0].email_html.as_str(),
    ];
    for fragment in rendered {
        for ch in ['<', '>', '"', '\''] {
            assert!(!fragment.contains(ch), "unescaped {ch:?} in {fragment}");
        }
    }
    assert_eq!(card.name_html, "&lt;img src&#61;x onerror&#61;alert(1)&gt;");
    // Raw values stay intact for the removal request.
    assert_eq!(card.name, "<img src=x onerror=alert(1)>");
    assert_eq!(card.participants[0].email, "<script>alert(1)</script>@x.edu");
}

#[test]
fn card_without_participants_has_no_rows() {
    let card = ActivityCardView::new("Gym Class", &activity(30, &[]));
    assert!(card.participants.is_empty());
    assert_eq!(card.spots_left, 30);
}

#[test]
fn card_rows_follow_participant_order() {
    let card = ActivityCardView::new("Chess Club", &activity(12, &["b@x.edu", "a@x.edu"]));
    let emails: Vec<&str> = card.participants.iter().map(|p| p.email.as_str()).collect();
    assert_eq!(emails, vec!["b@x.edu", "a@x.edu"]);
}
