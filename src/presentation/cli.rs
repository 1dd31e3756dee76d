use crate::application::services::{Logger, PermutationService, TodoService};
use crate::domain::entities::TodoCommand;
use crate::domain::value_objects::PositiveInt;
use crate::infrastructure::config::Config;
use crate::infrastructure::output::write_json;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// CLI for the permutation printer
#[derive(Parser, Debug)]
#[command(name = "permute", version)]
#[command(
    about = "Print every distinct permutation of each line of a file, comma-separated",
    long_about = None
)]
pub struct PermuteCli {
    /// File whose lines are permuted; blank lines are skipped
    pub file: PathBuf,
}

impl PermuteCli {
    pub fn run<W: Write>(&self, service: &PermutationService, out: &mut W) -> Result<()> {
        service.permute_file(&self.file, out)?;
        Ok(())
    }
}

/// CLI for the todos endpoint
#[derive(Parser, Debug)]
#[command(name = "todos", version)]
#[command(about = "Send GET, POST or DELETE to the todos API and pretty-print the JSON", long_about = None)]
pub struct TodosCli {
    #[command(subcommand)]
    pub command: TodosCommand,
}

#[derive(Subcommand, Debug)]
pub enum TodosCommand {
    /// List todos, newest first
    #[command(alias = "GET")]
    Get {
        /// Page to fetch
        #[arg(short, long)]
        page: Option<u64>,

        /// Page size
        #[arg(short, long)]
        limit: Option<u64>,
    },
    /// Create the fixed "New todo" item
    #[command(alias = "POST")]
    Post,
    /// Delete one todo by id
    #[command(alias = "DELETE")]
    Delete {
        /// Todo to delete
        id: u64,
    },
}

impl TodosCli {
    /// Sends the request and writes the pretty JSON to `out`.
    ///
    /// Nothing reaches `out` unless the request succeeded.
    pub async fn run<W: Write>(
        &self,
        service: &TodoService,
        config: &Config,
        logger: &dyn Logger,
        out: &mut W,
    ) -> Result<()> {
        let command = self.command.to_command(config).context("Invalid input")?;

        let json = service
            .execute(&command)
            .await
            .context("Failed to execute request")?;

        logger.info("Request sent, operation successful. Response:");
        write_json(out, &json)
    }
}

impl TodosCommand {
    pub fn to_command(&self, config: &Config) -> Result<TodoCommand> {
        match *self {
            TodosCommand::Get { page, limit } => Ok(TodoCommand::List {
                page: PositiveInt::new(page.unwrap_or(config.default_page), "page")?,
                limit: PositiveInt::new(limit.unwrap_or(config.default_limit), "limit")?,
            }),
            TodosCommand::Post => Ok(TodoCommand::Create),
            TodosCommand::Delete { id } => Ok(TodoCommand::Delete {
                id: PositiveInt::new(id, "id")?,
            }),
        }
    }
}
