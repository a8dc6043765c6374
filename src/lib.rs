//! List the GitHub Sponsors of a user.
//!
//! The `list` command binds a user handle and a [`SponsorLister`] into
//! [`ListOptions`]; [`list_run`] fetches the sponsors and renders them with a
//! terminal-aware [`TablePrinter`].

pub mod listers;
pub mod output;
pub mod cli;
pub mod utils;

pub use listers::*;
pub use output::*;
pub use cli::*;
pub use utils::*;
