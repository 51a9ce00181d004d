//! Signup form bound to the `SignupForm` signal.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

use leptos::prelude::*;

use crate::state::activities::ActivitiesState;
use crate::state::signup::SignupForm as SignupFields;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// `#signup-form` with the email input and activity select.
///
/// Inputs write through to state on every change; `on_submit` fires on a
/// native submit, after the browser's `required` checks pass.
#[component]
pub fn SignupForm(on_submit: Callback<()>) -> impl IntoView {
    let fields = expect_context::<RwSignal<SignupFields>>();
    let activities = expect_context::<RwSignal<ActivitiesState>>();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form id="signup-form" on:submit=submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || fields.with(|f| f.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        fields.update(|f| f.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || fields.with(|f| f.activity.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        fields.update(|f| f.activity = value);
                    }
                >
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    {move || {
                        activities
                            .with(|a| a.options.clone())
                            .into_iter()
                            .map(|name| {
                                let label = name.clone();
                                view! { <option value=name>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
