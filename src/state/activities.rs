//! Activity list state and per-card view models.
//!
//! DESIGN
//! ======
//! The list is replaced wholesale by each fetch result. Fetches are numbered
//! when issued and a result is applied only if it is newer than the last one
//! applied, so overlapping refreshes cannot leave an older catalog on screen.
//! Selection options are rebuilt on success only; a failed fetch leaves them
//! as they were.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use crate::net::error::ApiError;
use crate::net::types::{Activity, ActivityCatalog};
use crate::util::html::escape_html;

/// What the activity list region currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListDisplay {
    #[default]
    Loading,
    Loaded(ActivityCatalog),
    Failed,
}

/// Activity list plus the options offered by the signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivitiesState {
    pub list: ListDisplay,
    pub options: Vec<String>,
    issued: u64,
    applied: u64,
}

impl ActivitiesState {
    /// Number a new fetch. Pass the result to [`ActivitiesState::finish_fetch`].
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Apply the result of fetch `seq`.
    ///
    /// Returns `false` (and changes nothing) when a newer fetch was applied
    /// already.
    pub fn finish_fetch(&mut self, seq: u64, result: Result<ActivityCatalog, ApiError>) -> bool {
        if seq <= self.applied {
            return false;
        }
        self.applied = seq;
        match result {
            Ok(catalog) => {
                self.options = catalog.keys().cloned().collect();
                self.list = ListDisplay::Loaded(catalog);
            }
            Err(_) => self.list = ListDisplay::Failed,
        }
        true
    }

    /// View models for every card, in catalog order. Empty unless loaded.
    pub fn cards(&self) -> Vec<ActivityCardView> {
        match &self.list {
            ListDisplay::Loaded(catalog) => catalog
                .iter()
                .map(|(name, activity)| ActivityCardView::new(name, activity))
                .collect(),
            ListDisplay::Loading | ListDisplay::Failed => Vec::new(),
        }
    }
}

/// Everything one activity card renders.
///
/// `*_html` fields are already escaped and are inserted as markup; the raw
/// `name` and participant `email` are what removal handlers act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCardView {
    pub name: String,
    pub name_html: String,
    pub description_html: String,
    pub schedule_html: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCardView {
    pub fn new(name: &str, activity: &Activity) -> Self {
        Self {
            name: name.to_owned(),
            name_html: escape_html(name),
            description_html: escape_html(&activity.description),
            schedule_html: escape_html(&activity.schedule),
            spots_left: activity.spots_left(),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantRow { email: email.clone(), email_html: escape_html(email) })
                .collect(),
        }
    }

    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// One participant line with its removal control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub email_html: String,
}
