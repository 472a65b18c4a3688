use super::PopularCmd;
use crate::commands::Execute;
use crate::db::{popularity, Backend, Operation};
use crate::error::Result;
use crate::present::Present;

const NO_ENTRIES: &str = "No popular queries recorded yet.";

impl Execute for PopularCmd {
    fn execute(self, db: &mut dyn Backend, ui: &mut dyn Present) -> Result<()> {
        // The log table is created on first use; before that there is
        // nothing to query.
        if !db.table_exists(popularity::TABLE_NAME)? {
            ui.notify(NO_ENTRIES)?;
            return Ok(());
        }

        let entries = db.run(&Operation::ShowPopularQueries)?;
        if entries.is_empty() {
            ui.notify(NO_ENTRIES)?;
            return Ok(());
        }

        ui.show_table("Popular queries", &entries)?;
        Ok(())
    }
}
