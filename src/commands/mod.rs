//! Search flow commands.
//!
//! Each flow is defined in its own module with:
//! - the command struct with clap attributes for CLI parsing (`mod.rs`)
//! - the flow orchestration and its tests (`execute.rs`)

mod actor;
mod category;
mod keyword;
mod popular;

pub use actor::ActorCmd;
pub use category::CategoryCmd;
pub use keyword::{KeywordCmd, SearchScope};
pub use popular::PopularCmd;

use clap::Subcommand;

use crate::db::Backend;
use crate::error::{Result, SearchError};
use crate::present::Present;

/// Trait for running a search flow against a backend and a presenter.
pub trait Execute {
    fn execute(self, db: &mut dyn Backend, ui: &mut dyn Present) -> Result<()>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search films by keyword in title and/or description
    Keyword(KeywordCmd),

    /// Browse films by category, then release year
    Category(CategoryCmd),

    /// Browse films by actor
    Actor(ActorCmd),

    /// Show which searches are run most often
    Popular(PopularCmd),
}

impl Command {
    /// Run the selected flow to completion.
    pub fn run(self, db: &mut dyn Backend, ui: &mut dyn Present) -> Result<()> {
        match self {
            Command::Keyword(cmd) => cmd.execute(db, ui),
            Command::Category(cmd) => cmd.execute(db, ui),
            Command::Actor(cmd) => cmd.execute(db, ui),
            Command::Popular(cmd) => cmd.execute(db, ui),
        }
    }
}

/// Shown whenever the user cancels out of a selection table.
pub(crate) const NO_SELECTION: &str = "No selection made.";

/// A selection came back without a column the flow depends on.
pub(crate) fn missing_column(label: &str) -> SearchError {
    SearchError::query(format!(
        "result row is missing expected column '{}'",
        label
    ))
}

/// Report a popularity-log failure without aborting the flow; the user
/// already has their results.
pub(crate) fn report_log_failure(result: Result<()>, ui: &mut dyn Present) {
    if let Err(e) = result {
        log::warn!("{}", e);
        let _ = ui.notify("Note: this search could not be added to the popularity log.");
    }
}
