use super::ActorCmd;
use crate::commands::{missing_column, report_log_failure, Execute, NO_SELECTION};
use crate::db::{Backend, Operation, UsageKind};
use crate::error::{Result, SearchError};
use crate::present::Present;

impl Execute for ActorCmd {
    fn execute(self, db: &mut dyn Backend, ui: &mut dyn Present) -> Result<()> {
        let actors = db.run(&Operation::ActorList)?;
        if actors.is_empty() {
            ui.notify("No actors found.")?;
            return Ok(());
        }
        let Some(picked) = ui.pick_row("Choose an actor", &actors)? else {
            ui.notify(NO_SELECTION)?;
            return Ok(());
        };

        let actor_id = picked.get_i64("FID").ok_or_else(|| missing_column("FID"))?;
        let actor_id = i32::try_from(actor_id)
            .map_err(|_| SearchError::query(format!("actor id out of range: {}", actor_id)))?;
        let first = picked
            .get_str("FirstName")
            .ok_or_else(|| missing_column("FirstName"))?;
        let last = picked
            .get_str("LastName")
            .ok_or_else(|| missing_column("LastName"))?;
        let name = format!("{} {}", first, last);

        let films = db.run(&Operation::FilmByActor { actor_id })?;
        if films.is_empty() {
            ui.notify(&format!("No films found for actor '{}'.", name))?;
            return Ok(());
        }
        let Some(film) = ui.pick_row(&format!("Films by actor '{}'", name), &films)? else {
            ui.notify(NO_SELECTION)?;
            return Ok(());
        };

        ui.show_detail("Film details", &film)?;
        report_log_failure(db.log_use(UsageKind::FilmByActor, &name), ui);

        Ok(())
    }
}
