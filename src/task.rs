// Task data model and snapshot wire shape

use serde::{Deserialize, Serialize};

/// One to-do entry.
///
/// `title` serializes under the key `text`, which is the field name the
/// snapshot format has always used. `completed` is tolerated as absent in
/// older snapshots and defaults to false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "text")]
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new task; tasks always start out not completed.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }
}
