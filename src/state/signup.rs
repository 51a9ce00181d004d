//! Signup form field values.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

/// Current contents of the signup form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    /// `(activity, email)` when both fields are filled in.
    pub fn submission(&self) -> Option<(String, String)> {
        if self.activity.is_empty() || self.email.is_empty() {
            return None;
        }
        Some((self.activity.clone(), self.email.clone()))
    }

    /// Clear both fields, like `HTMLFormElement.reset()`.
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}
