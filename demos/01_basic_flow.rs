//! Example 01: Basic Task Flow
//!
//! This example walks through the core store operations: adding tasks,
//! editing one through the draft form, toggling completion, and deleting.
//!
//! Run with: cargo run --example 01_basic_flow

use eyre::Result;
use todostore::TodoStore;

fn main() -> Result<()> {
    // Create a temporary directory for this example
    let temp_dir = tempfile::tempdir()?;

    println!("TodoStore Basic Flow Example");
    println!("============================\n");
    println!("Store path: {}\n", temp_dir.path().display());

    let mut store = TodoStore::open(temp_dir.path());

    // ADD: commit in create mode appends
    println!("1. ADD - Creating two tasks...");
    store.commit_draft("Buy milk", "2%")?;
    store.commit_draft("Call dentist", "Reschedule the cleaning")?;
    println!("   {} tasks in the list\n", store.tasks().len());

    // EDIT: begin_edit fills the drafts, commit replaces in place
    println!("2. EDIT - Changing the milk order...");
    store.begin_edit(0);
    println!("   draft shows: {} / {}", store.draft_title(), store.draft_description());
    store.commit_draft("Buy milk", "Whole")?;
    println!("   task 0 is now: {}\n", store.tasks()[0].description);

    // TOGGLE: flip the completed flag
    println!("3. TOGGLE - Completing task 0...");
    store.toggle_complete(0);
    println!("   task 0 completed: {}\n", store.tasks()[0].completed);

    // DELETE: later tasks shift down
    println!("4. DELETE - Removing task 0...");
    store.delete_task(0);
    println!("   {} task left: {}\n", store.tasks().len(), store.tasks()[0].title);

    // PERSISTENCE: reopening the store reloads the snapshot
    println!("5. RELOAD - Opening a second store over the same path...");
    let reopened = TodoStore::open(temp_dir.path());
    println!("   reloaded {} task(s)", reopened.tasks().len());

    Ok(())
}
