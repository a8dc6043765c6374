use clap::{Parser, Subcommand};

/// Sponsors CLI - work with GitHub sponsors
#[derive(Parser, Debug)]
#[command(name = "sponsors")]
#[command(about = "Manage sponsors")]
#[command(long_about = "Work with GitHub sponsors.")]
#[command(version)]
pub struct CliArgs {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List sponsors for a user
    #[command(visible_alias = "ls")]
    #[command(after_help = "Examples:\n  # List sponsors of a user\n  $ sponsors list <user>")]
    List(ListArgs),
}

// Positional arguments of `sponsors list`. Arity is checked by the list
// command so its messages stay fixed regardless of clap's wording.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
pub struct ListArgs {
    /// Login of the user whose sponsors to list
    #[arg(value_name = "USER")]
    pub users: Vec<String>,
}
