//! Example 02: Filtered Views
//!
//! This example demonstrates the view filter and why the filtered view
//! carries original-list indices: mutations address tasks by their position
//! in the unfiltered list, never by their row in the filtered display.
//!
//! Run with: cargo run --example 02_filtering

use eyre::Result;
use todostore::{FilterKind, TodoStore};

fn main() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;

    println!("TodoStore Filtering Example");
    println!("===========================\n");

    let mut store = TodoStore::open(temp_dir.path());
    store.commit_draft("Water plants", "Just the ferns")?;
    store.commit_draft("Buy milk", "Whole")?;
    store.commit_draft("File taxes", "Before the deadline")?;
    store.toggle_complete(1);

    for filter in [FilterKind::All, FilterKind::Completed, FilterKind::Pending] {
        store.set_filter(filter);
        println!("Filter {}:", filter);
        for row in store.visible_tasks() {
            let marker = if row.task.completed { "x" } else { " " };
            println!("  {} [{}] {}", row.index, marker, row.task.title);
        }
        println!();
    }

    // Act through a filtered view: the second pending row is list index 2,
    // not row number 1, and VisibleTask::index keeps that straight.
    store.set_filter(FilterKind::Pending);
    let pending = store.visible_tasks();
    let target = pending[1].index;
    store.toggle_complete(target);
    println!("Completed '{}' via the pending view", store.tasks()[target].title);

    Ok(())
}
