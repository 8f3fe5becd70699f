//! Terminal front-end for the todo service.
//!
//! The binary is a thin host around `todo-core`: it supplies the ureq
//! transport, parses the command line, and prints the mirror.

pub mod render;
pub mod transport;

use clap::{Parser, Subcommand};
use todo_core::{ApiError, TodoClient, TodoPatch, TodoSession, Transport, DEFAULT_BASE_URL};

pub use render::render;
pub use transport::UreqTransport;

#[derive(Debug, Parser)]
#[command(name = "todo", about = "Manage the shared todo list")]
pub struct Cli {
    /// Service host.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every todo.
    List,
    /// Add a todo.
    Add { title: String },
    /// Flip a todo between done and not done.
    Toggle { id: String },
    /// Change a todo's title.
    Rename { id: String, title: String },
    /// Set title and/or completion explicitly.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Delete one todo.
    Delete { id: String },
    /// Delete every todo.
    Clear,
}

/// Refresh the mirror, then run `command` against it.
///
/// Every failure is logged before it is returned, so the caller only picks an
/// exit code.
pub fn execute<T: Transport>(
    session: &mut TodoSession<T>,
    command: &Command,
) -> Result<(), ApiError> {
    session.refresh()?;
    match command {
        Command::List => Ok(()),
        Command::Add { title } => session.add(title).map(drop),
        Command::Toggle { id } => session.toggle(id).map(drop),
        Command::Rename { id, title } => session.rename(id, title).map(drop),
        Command::Edit {
            id,
            title,
            completed,
        } => {
            let Some(patch) = TodoPatch::from_fields(title.clone(), *completed) else {
                let err = ApiError::Validation("edit needs --title or --completed".to_string());
                tracing::warn!(action = "edit", error = %err, "todo request failed");
                return Err(err);
            };
            session.update(id, &patch).map(drop)
        }
        Command::Delete { id } => session.delete(id),
        Command::Clear => session.delete_all(),
    }
}

/// Parse-independent entry point used by `main` and the tests.
pub fn run<T: Transport>(cli: &Cli, transport: T) -> (String, Result<(), ApiError>) {
    let mut session = TodoSession::new(TodoClient::new(&cli.base_url), transport);
    let outcome = execute(&mut session, &cli.command);
    (render(session.mirror()), outcome)
}
