use super::CategoryCmd;
use crate::commands::{missing_column, report_log_failure, Execute, NO_SELECTION};
use crate::db::{Backend, Operation, UsageKind};
use crate::error::{Result, SearchError};
use crate::present::Present;

impl Execute for CategoryCmd {
    fn execute(self, db: &mut dyn Backend, ui: &mut dyn Present) -> Result<()> {
        let categories = db.run(&Operation::CategoryList)?;
        if categories.is_empty() {
            ui.notify("No categories found.")?;
            return Ok(());
        }
        let Some(picked) = ui.pick_row("Choose a category", &categories)? else {
            ui.notify(NO_SELECTION)?;
            return Ok(());
        };
        let category = picked
            .get_str("category")
            .ok_or_else(|| missing_column("category"))?
            .to_string();

        let years = db.run(&Operation::YearList {
            category: category.clone(),
        })?;
        if years.is_empty() {
            ui.notify(&format!("No years found for category: {}", category))?;
            return Ok(());
        }
        let Some(picked) = ui.pick_row(&format!("Choose a year for '{}'", category), &years)?
        else {
            ui.notify(NO_SELECTION)?;
            return Ok(());
        };
        let year = picked.get_i64("year").ok_or_else(|| missing_column("year"))?;
        let year = i32::try_from(year)
            .map_err(|_| SearchError::query(format!("release year out of range: {}", year)))?;

        let films = db.run(&Operation::FilmByCategoryAndYear {
            category: category.clone(),
            year,
        })?;
        if films.is_empty() {
            ui.notify(&format!(
                "No films found for category '{}' in {}.",
                category, year
            ))?;
            return Ok(());
        }
        let Some(film) = ui.pick_row(
            &format!("Films by category '{}' and year '{}'", category, year),
            &films,
        )?
        else {
            ui.notify(NO_SELECTION)?;
            return Ok(());
        };

        ui.show_detail("Film details", &film)?;
        report_log_failure(
            db.log_use(
                UsageKind::FilmByCategoryAndYear,
                &format!("{},{}", category, year),
            ),
            ui,
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{int, row_set, text, FakeBackend, ScriptedPresenter};
    use crate::db::RowSet;

    fn category_rows() -> RowSet {
        row_set(
            &["Nr", "category"],
            vec![
                vec![int(5), text("Comedy")],
                vec![int(7), text("Drama")],
            ],
        )
    }

    fn year_rows() -> RowSet {
        row_set(&["year"], vec![vec![int(2005)], vec![int(2006)]])
    }

    fn film_rows() -> RowSet {
        row_set(
            &["title", "description", "actors"],
            vec![
                vec![text("AIRPLANE SIERRA"), text("..."), text("JIM CARREY")],
                vec![text("ANTHEM LUKE"), text("..."), text("MILLA PECK")],
            ],
        )
    }

    #[test]
    fn test_full_flow_logs_category_and_year() {
        let mut db =
            FakeBackend::with_responses(vec![category_rows(), year_rows(), film_rows()]);
        let mut ui = ScriptedPresenter::with_picks(vec![Some(0), Some(1), Some(0)]);

        CategoryCmd {}.execute(&mut db, &mut ui).unwrap();

        assert_eq!(
            db.calls,
            vec![
                Operation::CategoryList,
                Operation::YearList {
                    category: "Comedy".to_string()
                },
                Operation::FilmByCategoryAndYear {
                    category: "Comedy".to_string(),
                    year: 2006
                },
            ]
        );
        assert_eq!(ui.details.len(), 1);
        assert_eq!(ui.details[0].get_str("title"), Some("AIRPLANE SIERRA"));
        assert_eq!(
            db.logged,
            vec![("film_by_category_and_year", "Comedy,2006".to_string())]
        );
    }

    #[test]
    fn test_empty_category_list_stops_the_flow() {
        let mut db = FakeBackend::with_responses(vec![row_set(&["Nr", "category"], vec![])]);
        let mut ui = ScriptedPresenter::default();

        CategoryCmd {}.execute(&mut db, &mut ui).unwrap();

        assert_eq!(ui.notices, vec!["No categories found."]);
        assert_eq!(db.calls.len(), 1);
    }

    #[test]
    fn test_no_years_for_category_stops_after_category_selection() {
        let mut db =
            FakeBackend::with_responses(vec![category_rows(), row_set(&["year"], vec![])]);
        let mut ui = ScriptedPresenter::with_picks(vec![Some(0)]);

        CategoryCmd {}.execute(&mut db, &mut ui).unwrap();

        assert_eq!(ui.notices, vec!["No years found for category: Comedy"]);
        // category_list and year_list only, no film query
        assert_eq!(db.calls.len(), 2);
        assert!(db.logged.is_empty());
    }

    #[test]
    fn test_cancelling_category_selection_issues_no_further_queries() {
        let mut db = FakeBackend::with_responses(vec![category_rows()]);
        let mut ui = ScriptedPresenter::with_picks(vec![None]);

        CategoryCmd {}.execute(&mut db, &mut ui).unwrap();

        assert_eq!(db.calls, vec![Operation::CategoryList]);
        assert_eq!(ui.notices, vec!["No selection made."]);
        assert!(db.logged.is_empty());
    }

    #[test]
    fn test_cancelling_film_selection_logs_nothing() {
        let mut db =
            FakeBackend::with_responses(vec![category_rows(), year_rows(), film_rows()]);
        let mut ui = ScriptedPresenter::with_picks(vec![Some(1), Some(0), None]);

        CategoryCmd {}.execute(&mut db, &mut ui).unwrap();

        assert!(ui.details.is_empty());
        assert_eq!(ui.notices, vec!["No selection made."]);
        assert!(db.logged.is_empty());
    }

    #[test]
    fn test_no_films_for_pair_notifies() {
        let mut db = FakeBackend::with_responses(vec![
            category_rows(),
            year_rows(),
            row_set(&["title"], vec![]),
        ]);
        let mut ui = ScriptedPresenter::with_picks(vec![Some(0), Some(0)]);

        CategoryCmd {}.execute(&mut db, &mut ui).unwrap();

        assert_eq!(
            ui.notices,
            vec!["No films found for category 'Comedy' in 2005."]
        );
        assert!(db.logged.is_empty());
    }

    #[test]
    fn test_selection_without_category_column_is_a_query_error() {
        let mut db = FakeBackend::with_responses(vec![row_set(
            &["Nr", "name"],
            vec![vec![int(5), text("Comedy")]],
        )]);
        let mut ui = ScriptedPresenter::with_picks(vec![Some(0)]);

        let err = CategoryCmd {}.execute(&mut db, &mut ui).unwrap_err();
        assert!(matches!(err, SearchError::Query { .. }));
    }
}
