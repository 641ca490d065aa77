use crate::cli::args::Cli;
use crate::home;
use std::path::PathBuf;

/// Invocation-scoped configuration, built once during startup and handed
/// to every entry-point call.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved Sparrow installation root.
    pub home: PathBuf,
    pub verbose: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            home: home::resolve(
                cli.sparrow_home_internal.as_deref(),
                cli.sparrow_home.as_deref(),
            ),
            verbose: cli.effective_verbose(),
        }
    }
}
