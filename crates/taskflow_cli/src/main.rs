//! Command-line frontend for the TaskFlow core stores.
//!
//! # Responsibility
//! - Map subcommands onto `taskflow_core` store operations.
//! - Keep output line-oriented and deterministic for scripting.
//!
//! # Invariants
//! - Domain no-ops (blank text, unknown id) report a notice and exit 0.
//! - Environment failures (unopenable database, bad id, bad filter) exit 1.
//! - The CLI holds no task state of its own; it reads store snapshots only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use taskflow_core::db::open_db;
use taskflow_core::{
    default_log_level, init_logging, Filter, SqliteSlotRepository, ThemeStore, Todo, TodoId,
    TodoStore,
};
use uuid::Uuid;

const DEFAULT_DB_FILE_NAME: &str = "taskflow.sqlite3";

#[derive(Parser)]
#[command(name = "taskflow")]
#[command(about = "Personal task list over durable local storage")]
struct Cli {
    /// SQLite database file backing the stores.
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Absolute directory for rolling log files; logging stays off without it.
    #[arg(long, global = true)]
    log_dir: Option<String>,
    /// Log level applied when `--log-dir` is set.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Add { text: String },
    List {
        #[arg(long, default_value = "all")]
        filter: String,
    },
    Toggle { id: String },
    Rm { id: String },
    ClearCompleted,
    Stats,
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = resolve_log_level(cli.log_level.as_deref());
        init_logging(level, log_dir)?;
    }

    let db_path = cli.db.unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME));
    let conn = open_db(&db_path)
        .map_err(|err| format!("cannot open database `{}`: {err}", db_path.display()))?;
    let repo = SqliteSlotRepository::try_new(&conn)
        .map_err(|err| format!("storage is not ready: {err}"))?;

    match cli.command {
        Command::Add { text } => {
            let mut store = TodoStore::new(repo);
            match store.add(&text) {
                Some(todo) => println!("added {}", todo.id),
                None => println!("ignored empty task text"),
            }
        }
        Command::List { filter } => {
            let filter = resolve_filter(&filter)?;
            let store = TodoStore::new(repo);
            for todo in store.filtered(filter) {
                println!("{}", render_row(&todo));
            }
        }
        Command::Toggle { id } => {
            let id = parse_todo_id(&id)?;
            let mut store = TodoStore::new(repo);
            if store.toggle(id) {
                println!("toggled {id}");
            } else {
                println!("no task with id {id}");
            }
        }
        Command::Rm { id } => {
            let id = parse_todo_id(&id)?;
            let mut store = TodoStore::new(repo);
            if store.remove(id) {
                println!("removed {id}");
            } else {
                println!("no task with id {id}");
            }
        }
        Command::ClearCompleted => {
            let mut store = TodoStore::new(repo);
            let removed = store.clear_completed();
            println!("removed {removed} completed task(s)");
        }
        Command::Stats => {
            let store = TodoStore::new(repo);
            let counts = store.counts();
            println!("active={} completed={}", counts.active, counts.completed);
        }
        Command::Theme { toggle } => {
            let mut store = ThemeStore::new(repo);
            let mode = if toggle { store.toggle() } else { store.mode() };
            println!("theme={}", mode.as_str());
        }
    }

    Ok(())
}

fn resolve_filter(raw: &str) -> Result<Filter, String> {
    Filter::parse(raw)
        .ok_or_else(|| format!("unknown filter `{raw}`; expected all|active|completed"))
}

fn resolve_log_level(explicit: Option<&str>) -> &str {
    explicit.unwrap_or(default_log_level())
}

fn parse_todo_id(raw: &str) -> Result<TodoId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid task id `{raw}`; expected a uuid"))
}

fn render_row(todo: &Todo) -> String {
    let mark = if todo.completed { 'x' } else { ' ' };
    format!("[{mark}] {}  {}", todo.id, todo.text)
}
