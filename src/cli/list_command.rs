use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

use crate::cli::{Factory, ListArgs};
use crate::listers::{ApiClient, GraphQlSponsorClient, SponsorLister};
use crate::output::{IoStreams, TablePrinter};
use crate::utils::{
    config::DEFAULT_HOSTNAME,
    error::{SponsorsError, SponsorsResult},
    types::User,
};

/// Everything a single `sponsors list` run needs
pub struct ListOptions<'a> {
    pub io: &'a mut IoStreams,
    pub sponsor_lister: Box<dyn SponsorLister>,
    pub user: User,
}

/// Replacement for [`list_run`], receiving the bound options instead
pub type RunOverride = Box<dyn for<'a> FnOnce(ListOptions<'a>) -> SponsorsResult<()>>;

/// Binds `sponsors list <user>` arguments to a [`ListOptions`] and runs it
pub struct ListCommand<'f> {
    factory: &'f mut Factory,
    run_override: Option<RunOverride>,
}

impl<'f> ListCommand<'f> {
    pub fn new(factory: &'f mut Factory) -> Self {
        Self {
            factory,
            run_override: None,
        }
    }

    /// Hand the bound options to `run` instead of listing sponsors
    pub fn with_run_override<F>(mut self, run: F) -> Self
    where
        F: for<'a> FnOnce(ListOptions<'a>) -> SponsorsResult<()> + 'static,
    {
        self.run_override = Some(Box::new(run));
        self
    }

    /// Parse raw arguments (without the command name) and run
    pub async fn execute<I, T>(self, argv: I) -> SponsorsResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let full_argv = std::iter::once(OsString::from("list")).chain(argv.into_iter().map(Into::into));

        let args = match ListArgs::try_parse_from(full_argv) {
            Ok(args) => args,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                write!(self.factory.io.out(), "{}", e.render())?;
                return Ok(());
            }
            Err(e) => return Err(SponsorsError::Flag(e.to_string().trim_end().to_string())),
        };

        self.run(args).await
    }

    /// Validate parsed arguments, build the lister and run
    pub async fn run(self, args: ListArgs) -> SponsorsResult<()> {
        exact_args(&args.users, 1, "must specify a user")?;
        let user = User::from(args.users[0].as_str());

        let ListCommand { factory, run_override } = self;
        let http = (factory.http_client)()?;

        let sponsor_lister = GraphQlSponsorClient::new(DEFAULT_HOSTNAME, ApiClient::from_http(http));
        debug!(user = %user, host = DEFAULT_HOSTNAME, "bound list command");

        let mut opts = ListOptions {
            io: &mut factory.io,
            sponsor_lister: Box::new(sponsor_lister),
            user,
        };

        match run_override {
            Some(run) => run(opts),
            None => list_run(&mut opts).await,
        }
    }
}

/// Require exactly `n` positional arguments
fn exact_args(args: &[String], n: usize, message: &str) -> SponsorsResult<()> {
    if args.len() > n {
        return Err(SponsorsError::flag("too many arguments"));
    }
    if args.len() < n {
        return Err(SponsorsError::flag(message));
    }
    Ok(())
}

/// Fetch the sponsors of `opts.user` and print them as a one-column table
pub async fn list_run(opts: &mut ListOptions<'_>) -> SponsorsResult<()> {
    let sponsors = opts
        .sponsor_lister
        .list_sponsors(&opts.user)
        .await
        .map_err(SponsorsError::SponsorList)?;

    let mut tp = TablePrinter::new(&*opts.io).with_header(&["USER"]);
    for sponsor in &sponsors {
        tp.add_field(sponsor.as_str());
        tp.end_row();
    }

    tp.render(&mut *opts.io)?;
    Ok(())
}
