use std::process::ExitCode;

use clap::Parser;

use film_search::cli::Args;
use film_search::config::DbSettings;
use film_search::db::DbClient;
use film_search::present::ConsolePresenter;

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let settings = match DbSettings::resolve(&args.config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // A failed connection is fatal; everything after this point reports
    // and exits cleanly instead.
    let mut db = match DbClient::connect(&settings) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut ui = ConsolePresenter::stdio();
    let code = match args.command.run(&mut db, &mut ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    };

    db.close();
    code
}
