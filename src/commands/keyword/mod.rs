mod execute;

use clap::{Args, ValueEnum};

/// Search films by keyword
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  film_search keyword -k love                    # Title and description
  film_search keyword -k love --scope title      # Title only
  film_search keyword -k drama --scope description")]
pub struct KeywordCmd {
    /// Keyword to look for (matched as a substring)
    #[arg(short, long)]
    pub keyword: String,

    /// Where to look for the keyword
    #[arg(short, long, value_enum, default_value_t = SearchScope::Both)]
    pub scope: SearchScope,
}

/// Which film fields the keyword is matched against.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    Title,
    Description,
    Both,
}
