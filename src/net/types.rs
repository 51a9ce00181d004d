//! Wire DTOs for the activities REST API.
//!
//! DESIGN
//! ======
//! `ActivityCatalog` is an `IndexMap` so the list renders in the key order of
//! the response object. A repeated key keeps its first position and takes the
//! later value.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use indexmap::IndexMap;
use serde::Deserialize;

/// A schedulable offering with a capacity and a roster of participants.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant email addresses in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Not clamped: an over-full activity yields a negative value.
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - taken
    }
}

/// All activities keyed by name, in response order.
pub type ActivityCatalog = IndexMap<String, Activity>;

/// Body of a signup/removal response.
///
/// Success bodies carry `message`; error bodies carry `detail`. Both are
/// optional so a sparse body still parses and falls back to generic text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MutationReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
