use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Result, eyre};
use std::path::PathBuf;
use todostore::{FilterKind, TodoStore};

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "TodoStore CLI - to-do list backed by a JSON snapshot store")]
#[command(version)]
struct Cli {
    /// Path to the store directory (default: platform data dir, else current directory)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add { title: String, description: String },

    /// Replace the title and description of the task at INDEX
    Edit {
        index: usize,
        title: String,
        description: String,
    },

    /// Toggle the completed flag of the task at INDEX
    Done { index: usize },

    /// Delete the task at INDEX
    Rm { index: usize },

    /// List tasks
    List {
        /// Show all, completed, or pending tasks
        #[arg(short, long, default_value = "all")]
        filter: FilterKind,
    },
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let store_path = cli
        .store_path
        .or_else(|| dirs::data_local_dir().map(|d| d.join("todostore")))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut store = TodoStore::open(&store_path);

    match cli.command {
        Commands::Add { title, description } => {
            store.commit_draft(&title, &description)?;
            println!("Added task {}", store.tasks().len() - 1);
        }
        Commands::Edit {
            index,
            title,
            description,
        } => {
            check_index(&store, index)?;
            store.begin_edit(index);
            store.commit_draft(&title, &description)?;
            println!("Updated task {}", index);
        }
        Commands::Done { index } => {
            check_index(&store, index)?;
            store.toggle_complete(index);
            let state = if store.tasks()[index].completed {
                "completed"
            } else {
                "pending"
            };
            println!("Task {} is now {}", index, state);
        }
        Commands::Rm { index } => {
            check_index(&store, index)?;
            store.delete_task(index);
            println!("Deleted task {}", index);
        }
        Commands::List { filter } => {
            store.set_filter(filter);
            let visible = store.visible_tasks();
            if visible.is_empty() {
                println!("No {} tasks.", filter);
                return Ok(());
            }
            for row in visible {
                let marker = if row.task.completed {
                    "[x]".green()
                } else {
                    "[ ]".normal()
                };
                let title = if row.task.completed {
                    row.task.title.dimmed()
                } else {
                    row.task.title.bold()
                };
                println!(
                    "{} {} {} - {}",
                    format!("{:>3}", row.index).cyan(),
                    marker,
                    title,
                    row.task.description
                );
            }
        }
    }

    Ok(())
}

fn check_index(store: &TodoStore, index: usize) -> Result<()> {
    if index >= store.tasks().len() {
        return Err(eyre!(
            "no task at index {} (have {})",
            index,
            store.tasks().len()
        ));
    }
    Ok(())
}
