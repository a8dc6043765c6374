// CLI interface components
pub mod cli_args;
pub mod cli_runner;
pub mod list_command;
pub mod output_formatter;

pub use cli_args::*;
pub use cli_runner::*;
pub use list_command::*;
pub use output_formatter::*;
