// To-do list state container with snapshot persistence

use crate::filter::{self, FilterKind, VisibleTask};
use crate::snapshot;
use crate::task::Task;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Rejection reasons for `commit_draft`. Validation failure leaves the store
/// completely unchanged, so the caller's form state survives intact.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error("task description is empty")]
    EmptyDescription,
}

/// Owns the ordered task list, the active view filter, and the create/edit
/// form state, and keeps the on-disk snapshot in sync with every mutation.
///
/// The store is a plain owned value: `&mut self` mutations give it exactly
/// one writer, and the presentation layer goes through the methods here
/// rather than touching the list directly. Construct one per session with
/// [`TodoStore::open`]; dropping it is the teardown.
pub struct TodoStore {
    snapshot_path: PathBuf,
    tasks: Vec<Task>,
    filter: FilterKind,
    editing: Option<usize>,
    draft_title: String,
    draft_description: String,
}

impl TodoStore {
    /// Open a store rooted at `path`.
    ///
    /// The snapshot lives at `<path>/.todostore/todos.json`. A missing or
    /// unreadable snapshot yields an empty list; opening never fails outward.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let snapshot_path = path
            .as_ref()
            .join(".todostore")
            .join(snapshot::SNAPSHOT_FILE);
        let tasks = snapshot::load(&snapshot_path);

        Self {
            snapshot_path,
            tasks,
            filter: FilterKind::All,
            editing: None,
            draft_title: String::new(),
            draft_description: String::new(),
        }
    }

    /// The full unfiltered task list, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The active view filter.
    pub fn filter(&self) -> FilterKind {
        self.filter
    }

    /// Index of the task being edited, or None in create mode.
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }

    /// Commit the form: append a new task in create mode, or replace the
    /// title and description of the task under edit, preserving its
    /// completed flag. One commit action serves both flows, keyed on
    /// whether an edit is in progress.
    ///
    /// Both inputs are trimmed; an empty title or description after trim is
    /// rejected with no state change. On success the store returns to create
    /// mode, drafts are cleared, and the snapshot is rewritten.
    pub fn commit_draft(
        &mut self,
        title: &str,
        description: &str,
    ) -> Result<(), ValidationError> {
        let title = title.trim();
        let description = description.trim();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        match self.editing.and_then(|i| self.tasks.get_mut(i)) {
            Some(task) => {
                task.title = title.to_string();
                task.description = description.to_string();
            }
            None => self.tasks.push(Task::new(title, description)),
        }

        self.editing = None;
        self.draft_title.clear();
        self.draft_description.clear();
        self.persist();
        Ok(())
    }

    /// Remove the task at `index`; later tasks shift down by one. Out of
    /// range is a no-op.
    ///
    /// If the removed task was under edit, the store drops back to create
    /// mode and discards the drafts; an edit of a later task keeps tracking
    /// the same task at its shifted position.
    pub fn delete_task(&mut self, index: usize) {
        if index >= self.tasks.len() {
            debug!(index, "delete ignored, index out of range");
            return;
        }

        self.tasks.remove(index);

        match self.editing {
            Some(i) if i == index => {
                self.editing = None;
                self.draft_title.clear();
                self.draft_description.clear();
            }
            Some(i) if i > index => self.editing = Some(i - 1),
            _ => {}
        }

        self.persist();
    }

    /// Flip the completed flag of the task at `index`, leaving everything
    /// else untouched. Out of range is a no-op.
    pub fn toggle_complete(&mut self, index: usize) {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist();
            }
            None => debug!(index, "toggle ignored, index out of range"),
        }
    }

    /// Enter edit mode for the task at `index`, copying its current title
    /// and description into the drafts for the form to show. Does not mutate
    /// the list and does not persist. Out of range is a no-op.
    pub fn begin_edit(&mut self, index: usize) {
        match self.tasks.get(index) {
            Some(task) => {
                self.draft_title = task.title.clone();
                self.draft_description = task.description.clone();
                self.editing = Some(index);
            }
            None => debug!(index, "edit ignored, index out of range"),
        }
    }

    /// Set the view filter. Pure view state: not persisted, no effect on the
    /// task list.
    pub fn set_filter(&mut self, filter: FilterKind) {
        self.filter = filter;
    }

    /// The task list under the active filter, recomputed on demand. Each row
    /// carries the task's unfiltered index so callers address the right task
    /// when mutating through a filtered view.
    pub fn visible_tasks(&self) -> Vec<VisibleTask<'_>> {
        filter::visible(&self.tasks, self.filter)
    }

    fn persist(&self) {
        if let Err(e) = snapshot::save(&self.snapshot_path, &self.tasks) {
            // In-memory state stays authoritative for the session
            warn!(
                path = %self.snapshot_path.display(),
                error = %e,
                "failed to write snapshot, continuing with in-memory state"
            );
        }
    }
}
