use anyhow::Context;
use clap::Parser;
use std::io::Write;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Commands, ListCommand, OutputFormatter};
use crate::output::IoStreams;
use crate::utils::{
    config::ApiConfig,
    error::{SponsorsError, SponsorsResult},
};

/// Produces the HTTP client used by API-backed listers
pub type HttpClientFn = Box<dyn Fn() -> SponsorsResult<Client>>;

/// Shared collaborators handed to commands
pub struct Factory {
    pub io: IoStreams,
    pub http_client: HttpClientFn,
}

impl Factory {
    pub fn new<F>(io: IoStreams, http_client: F) -> Self
    where
        F: Fn() -> SponsorsResult<Client> + 'static,
    {
        Self {
            io,
            http_client: Box::new(http_client),
        }
    }

    /// Factory wired to the process streams and environment configuration
    pub fn system() -> Self {
        Self::new(IoStreams::system(), || {
            let config = ApiConfig::from_env()?;
            build_http_client(&config)
        })
    }
}

/// Build an authenticated API client from `config`
pub fn build_http_client(config: &ApiConfig) -> SponsorsResult<Client> {
    let token = config.token.as_deref().ok_or_else(|| {
        SponsorsError::Authentication(
            "set the GH_TOKEN environment variable to a GitHub token".to_string(),
        )
    })?;

    let mut auth = HeaderValue::from_str(&format!("bearer {}", token)).map_err(|_| {
        SponsorsError::Configuration("auth token contains invalid characters".to_string())
    })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

    debug!(timeout_seconds = config.timeout_seconds, "building HTTP client");

    Client::builder()
        .user_agent(concat!("sponsors/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .timeout(config.timeout())
        .build()
        .map_err(SponsorsError::HttpClient)
}

/// Install the stderr tracing subscriber
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = if verbose {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("failed to initialise logging")
}

/// Print a failed run to the diagnostics stream and return the exit code
pub fn report_result(io: &mut IoStreams, result: SponsorsResult<()>) -> i32 {
    let Err(e) = result else {
        return 0;
    };

    let colorize = io.is_stderr_tty() && io.color_enabled();
    let mut message = OutputFormatter::format_error(&e, colorize);
    if e.is_flag_error() {
        message.push('\n');
        message.push_str(&OutputFormatter::format_usage_hint());
    }

    let err_out = io.err_out();
    // Nothing is left to report to if stderr itself is gone
    let _ = writeln!(err_out, "{}", message).and_then(|_| err_out.flush());
    1
}

/// Run a parsed command against `factory` and return the exit code
pub async fn run_command(command: Commands, factory: &mut Factory) -> i32 {
    let result = match command {
        Commands::List(list_args) => ListCommand::new(factory).run(list_args).await,
    };
    report_result(&mut factory.io, result)
}

/// Main entry point for CLI execution
pub async fn run_cli() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose)?;

    let mut factory = Factory::system();
    let code = run_command(args.command, &mut factory).await;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
