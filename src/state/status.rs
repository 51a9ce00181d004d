//! Transient status message shown after a signup or removal.
//!
//! DESIGN
//! ======
//! Every `show` bumps a generation counter and hands it to the caller. The
//! hide timer passes that generation back to `expire`, which is ignored once
//! a newer message has been shown. A new outcome therefore restarts the
//! countdown instead of being cut short by the previous timer.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Styling of a status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Text and kind of a mutation outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Error }
    }
}

/// The status region: last message plus whether it is currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusState {
    message: Option<StatusMessage>,
    visible: bool,
    generation: u64,
}

impl StatusState {
    /// Replace the current message and make it visible.
    ///
    /// Returns the generation to pass to [`StatusState::expire`].
    pub fn show(&mut self, message: StatusMessage) -> u64 {
        self.generation += 1;
        self.message = Some(message);
        self.visible = true;
        self.generation
    }

    /// Hide the message if no newer one was shown since `generation`.
    ///
    /// Returns whether the region was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        self.message.as_ref().map_or("", |m| m.text.as_str())
    }

    pub fn kind(&self) -> Option<StatusKind> {
        self.message.as_ref().map(|m| m.kind)
    }

    /// Class list for the `#message` element.
    ///
    /// The kind class stays after hiding so the fade-out keeps its colour.
    pub fn css_class(&self) -> String {
        match (self.kind(), self.visible) {
            (Some(kind), true) => kind.css_class().to_owned(),
            (Some(kind), false) => format!("{} hidden", kind.css_class()),
            (None, _) => "hidden".to_owned(),
        }
    }
}
