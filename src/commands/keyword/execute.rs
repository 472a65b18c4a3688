use super::{KeywordCmd, SearchScope};
use crate::commands::{report_log_failure, Execute, NO_SELECTION};
use crate::db::{Backend, Operation, UsageKind};
use crate::error::{Result, SearchError};
use crate::present::Present;

/// Wrap user input for substring matching. Literal `%`/`_` are passed
/// through unescaped.
fn like_pattern(keyword: &str) -> String {
    format!("%{}%", keyword)
}

impl Execute for KeywordCmd {
    fn execute(self, db: &mut dyn Backend, ui: &mut dyn Present) -> Result<()> {
        let keyword = self.keyword.trim();
        if keyword.is_empty() {
            return Err(SearchError::validation(
                "keyword",
                "cannot be empty or whitespace only",
            ));
        }

        let pattern = like_pattern(keyword);
        let op = match self.scope {
            SearchScope::Both => Operation::FilmByKeywordBoth { pattern },
            SearchScope::Title => Operation::FilmByKeywordInTitle { pattern },
            SearchScope::Description => Operation::FilmByKeywordInDescription { pattern },
        };

        let films = db.run(&op)?;
        if films.is_empty() {
            ui.notify(&format!(
                "No Movie found matching the keyword: < {} >!",
                keyword
            ))?;
            return Ok(());
        }

        let picked = ui.pick_row(&format!("Films by keyword '{}'", keyword), &films)?;
        match picked {
            Some(film) => {
                ui.show_detail("Film details", &film)?;
                report_log_failure(db.log_use(UsageKind::FilmByKeyword, keyword), ui);
            }
            None => ui.notify(NO_SELECTION)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{int, row_set, text, FakeBackend, ScriptedPresenter};

    fn film_rows() -> crate::db::RowSet {
        row_set(
            &["title", "year", "category", "description"],
            vec![
                vec![text("LOVE ACTUALLY"), int(2003), text("Comedy"), text("...")],
                vec![text("CRAZY LOVE"), int(2007), text("Drama"), text("...")],
            ],
        )
    }

    fn cmd(keyword: &str, scope: SearchScope) -> KeywordCmd {
        KeywordCmd {
            keyword: keyword.to_string(),
            scope,
        }
    }

    #[test]
    fn test_empty_keyword_is_validation_error_before_any_query() {
        let mut db = FakeBackend::default();
        let mut ui = ScriptedPresenter::default();

        let err = cmd("   ", SearchScope::Both)
            .execute(&mut db, &mut ui)
            .unwrap_err();

        assert!(matches!(err, SearchError::Validation { .. }));
        assert!(db.calls.is_empty());
        assert!(db.logged.is_empty());
    }

    #[test]
    fn test_no_matches_notifies_and_logs_nothing() {
        let mut db = FakeBackend::with_responses(vec![row_set(&["title"], vec![])]);
        let mut ui = ScriptedPresenter::default();

        cmd("love", SearchScope::Both)
            .execute(&mut db, &mut ui)
            .unwrap();

        assert_eq!(
            ui.notices,
            vec!["No Movie found matching the keyword: < love >!"]
        );
        assert!(db.logged.is_empty());
    }

    #[test]
    fn test_scope_selects_the_operation_and_wraps_the_pattern() {
        for (scope, expected) in [
            (
                SearchScope::Both,
                Operation::FilmByKeywordBoth {
                    pattern: "%love%".to_string(),
                },
            ),
            (
                SearchScope::Title,
                Operation::FilmByKeywordInTitle {
                    pattern: "%love%".to_string(),
                },
            ),
            (
                SearchScope::Description,
                Operation::FilmByKeywordInDescription {
                    pattern: "%love%".to_string(),
                },
            ),
        ] {
            let mut db = FakeBackend::with_responses(vec![film_rows()]);
            let mut ui = ScriptedPresenter::default();

            cmd("love", scope).execute(&mut db, &mut ui).unwrap();

            assert_eq!(db.calls, vec![expected]);
        }
    }

    #[test]
    fn test_selection_shows_detail_and_logs_the_keyword() {
        let mut db = FakeBackend::with_responses(vec![film_rows()]);
        let mut ui = ScriptedPresenter::with_picks(vec![Some(1)]);

        cmd("love", SearchScope::Both)
            .execute(&mut db, &mut ui)
            .unwrap();

        assert_eq!(ui.details.len(), 1);
        assert_eq!(ui.details[0].get_str("title"), Some("CRAZY LOVE"));
        assert_eq!(db.logged, vec![("film_by_keyword", "love".to_string())]);
    }

    #[test]
    fn test_cancelled_selection_logs_nothing() {
        let mut db = FakeBackend::with_responses(vec![film_rows()]);
        let mut ui = ScriptedPresenter::with_picks(vec![None]);

        cmd("love", SearchScope::Both)
            .execute(&mut db, &mut ui)
            .unwrap();

        assert!(ui.details.is_empty());
        assert!(db.logged.is_empty());
        assert_eq!(ui.notices, vec!["No selection made."]);
    }

    #[test]
    fn test_keyword_is_trimmed_before_matching_and_logging() {
        let mut db = FakeBackend::with_responses(vec![film_rows()]);
        let mut ui = ScriptedPresenter::with_picks(vec![Some(0)]);

        cmd("  love  ", SearchScope::Title)
            .execute(&mut db, &mut ui)
            .unwrap();

        assert_eq!(
            db.calls,
            vec![Operation::FilmByKeywordInTitle {
                pattern: "%love%".to_string()
            }]
        );
        assert_eq!(db.logged, vec![("film_by_keyword", "love".to_string())]);
    }

    #[test]
    fn test_log_failure_is_reported_but_does_not_abort() {
        let mut db = FakeBackend::with_responses(vec![film_rows()]);
        db.fail_log = true;
        let mut ui = ScriptedPresenter::with_picks(vec![Some(0)]);

        cmd("love", SearchScope::Both)
            .execute(&mut db, &mut ui)
            .unwrap();

        assert_eq!(ui.details.len(), 1);
        assert!(ui.notices.iter().any(|n| n.contains("popularity log")));
    }
}
