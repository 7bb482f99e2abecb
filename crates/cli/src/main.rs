mod api;
mod commands;
mod config;
mod credentials;
mod session;
mod ui;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Manage your todos from the terminal")]
#[command(version)]
#[command(after_help = "Examples:
  todo signup alice@example.com        Create an account
  todo login alice@example.com         Sign in
  todo verify                          Verify your email address
  todo todos add work 'write report'   Add a todo
  todo todos list                      List your todos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    #[command(after_help = "Example: todo signup alice@example.com")]
    Signup {
        /// Your email address
        email: String,
    },

    /// Sign in and store a session token
    #[command(after_help = "Example: todo login alice@example.com")]
    Login {
        /// Your email address
        email: String,
    },

    /// Sign out of this machine
    Logout,

    /// Show the signed-in account
    Whoami,

    /// Verify your email address with a one-time code
    Verify,

    /// List, add, edit or remove todos
    #[command(after_help = "Examples:
  todo todos list
  todo todos list --all
  todo todos add home 'water plants'
  todo todos edit <id> --tag urgent --date 2025-03-01
  todo todos rm <id>")]
    Todos {
        #[command(subcommand)]
        action: TodoCommands,
    },

    /// Generate shell completions
    #[command(after_help = "Examples:
  todo completions bash > ~/.bash_completion.d/todo
  todo completions zsh > ~/.zfunc/_todo
  todo completions fish > ~/.config/fish/completions/todo.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum TodoCommands {
    /// List your todos
    #[command(visible_alias = "ls")]
    List {
        /// Show every user's todos
        #[arg(long)]
        all: bool,
    },

    /// Add a todo dated now
    Add {
        tag: String,
        description: String,
    },

    /// Change a todo's tag, description or date
    Edit {
        /// Todo ID from `todo todos list`
        id: String,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// YYYY-MM-DD or an RFC 3339 timestamp
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a todo
    #[command(visible_alias = "delete")]
    Rm {
        /// Todo ID from `todo todos list`
        id: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        ui::print_error(&err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = envy::prefixed("TODO_").from_env::<Config>()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Signup { email } => {
            let password = ui::prompt_password()?;
            commands::signup::run(&config, &email, password).await
        }
        Commands::Login { email } => {
            let password = ui::prompt_password()?;
            commands::login::run(&config, &email, password).await
        }
        Commands::Logout => commands::logout::run(&config),
        Commands::Whoami => commands::whoami::run(&config),
        Commands::Verify => commands::verify::run(&config).await,
        Commands::Todos { action } => match action {
            TodoCommands::List { all } => commands::todos::list(&config, all).await,
            TodoCommands::Add { tag, description } => {
                commands::todos::add(&config, tag, description).await
            }
            TodoCommands::Edit {
                id,
                tag,
                description,
                date,
            } => commands::todos::edit(&config, &id, tag, description, date).await,
            TodoCommands::Rm { id } => commands::todos::remove(&config, &id).await,
        },
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "todo", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_todo_edit_flags() {
        let cli = Cli::try_parse_from([
            "todo", "todos", "edit", "abc", "--tag", "urgent", "--date", "2025-03-01",
        ])
        .unwrap();

        let Commands::Todos {
            action:
                TodoCommands::Edit {
                    id,
                    tag,
                    description,
                    date,
                },
        } = cli.command
        else {
            panic!("expected todos edit");
        };
        assert_eq!(id, "abc");
        assert_eq!(tag.as_deref(), Some("urgent"));
        assert_eq!(description, None);
        assert_eq!(date.as_deref(), Some("2025-03-01"));
    }

    #[test]
    fn list_alias_accepts_all_flag() {
        let cli = Cli::try_parse_from(["todo", "todos", "ls", "--all"]).unwrap();

        assert!(matches!(
            cli.command,
            Commands::Todos {
                action: TodoCommands::List { all: true }
            }
        ));
    }
}
