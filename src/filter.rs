// View filtering for the task list

use crate::task::Task;
use thiserror::Error;

/// View predicate applied to the task list for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    #[default]
    All,
    Completed,
    Pending,
}

impl FilterKind {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterKind::All => true,
            FilterKind::Completed => task.completed,
            FilterKind::Pending => !task.completed,
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterKind::All => write!(f, "all"),
            FilterKind::Completed => write!(f, "completed"),
            FilterKind::Pending => write!(f, "pending"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown filter: {0} (expected all, completed, or pending)")]
pub struct ParseFilterError(String);

impl std::str::FromStr for FilterKind {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterKind::All),
            "completed" => Ok(FilterKind::Completed),
            "pending" => Ok(FilterKind::Pending),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

/// One row of a filtered view.
///
/// `index` is the task's position in the unfiltered list, so callers acting
/// on a row (toggle, edit, delete) address the right task even when the view
/// is filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleTask<'a> {
    pub index: usize,
    pub task: &'a Task,
}

/// Apply `filter` to `tasks`, preserving relative order.
pub fn visible(tasks: &[Task], filter: FilterKind) -> Vec<VisibleTask<'_>> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.matches(task))
        .map(|(index, task)| VisibleTask { index, task })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task {
                title: "a".to_string(),
                description: "first".to_string(),
                completed: false,
            },
            Task {
                title: "b".to_string(),
                description: "second".to_string(),
                completed: true,
            },
            Task {
                title: "c".to_string(),
                description: "third".to_string(),
                completed: false,
            },
        ]
    }

    #[test]
    fn test_all_is_full_sequence() {
        let tasks = sample();
        let view = visible(&tasks, FilterKind::All);
        assert_eq!(view.len(), 3);
        assert_eq!(
            view.iter().map(|v| v.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_completed_is_exact_subsequence() {
        let tasks = sample();
        let view = visible(&tasks, FilterKind::Completed);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].index, 1);
        assert_eq!(view[0].task.title, "b");
    }

    #[test]
    fn test_pending_preserves_order_and_indices() {
        let tasks = sample();
        let view = visible(&tasks, FilterKind::Pending);
        assert_eq!(view.iter().map(|v| v.index).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(view[1].task.title, "c");
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("all".parse::<FilterKind>().unwrap(), FilterKind::All);
        assert_eq!(
            "completed".parse::<FilterKind>().unwrap(),
            FilterKind::Completed
        );
        assert_eq!("pending".parse::<FilterKind>().unwrap(), FilterKind::Pending);
        assert!("done".parse::<FilterKind>().is_err());
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(FilterKind::All.to_string(), "all");
        assert_eq!(FilterKind::Pending.to_string(), "pending");
    }
}
