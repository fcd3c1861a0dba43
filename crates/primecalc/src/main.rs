//! primecalc: prime number enumerator.

use std::process::ExitCode;

use primecalc_cli::presenter::{CLIResultPresenter, ResultPresenter};
use primecalc_lib::{app, config, errors, logging};

fn main() -> ExitCode {
    logging::init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let presenter = CLIResultPresenter::new(config.verbose, config.json);
            presenter.present_error(&format!("{err:#}"));
            ExitCode::from(errors::exit_code(&err))
        }
    }
}
