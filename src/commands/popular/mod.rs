mod execute;

use clap::Args;

/// Show the most popular searches
#[derive(Args, Debug)]
#[command(after_help = "\
Reads the popularity log written by the other searches; the view itself
is not logged.")]
pub struct PopularCmd {}
