mod execute;

use clap::Args;

/// Browse films by category and release year
#[derive(Args, Debug)]
#[command(after_help = "\
Walks through three tables: pick a category, pick one of its release
years, then pick a film to see its details.")]
pub struct CategoryCmd {}

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    fn test_category_takes_no_arguments() {
        let args = Args::try_parse_from(["film_search", "category"]).unwrap();
        assert!(matches!(
            args.command,
            crate::commands::Command::Category(_)
        ));
    }

    #[rstest]
    fn test_category_rejects_stray_arguments() {
        let result = Args::try_parse_from(["film_search", "category", "Comedy"]);
        assert!(result.is_err());
    }
}
