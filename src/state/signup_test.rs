use super::*;

#[test]
fn submission_requires_both_fields() {
    let mut form = SignupForm::default();
    assert_eq!(form.submission(), None);

    form.email = "a@b.com".to_owned();
    assert_eq!(form.submission(), None);

    form.activity = "Chess Club".to_owned();
    assert_eq!(
        form.submission(),
        Some(("Chess Club".to_owned(), "a@b.com".to_owned()))
    );
}

#[test]
fn reset_clears_fields() {
    let mut form = SignupForm { email: "a@b.com".to_owned(), activity: "Chess Club".to_owned() };
    form.reset();
    assert_eq!(form, SignupForm::default());
}
