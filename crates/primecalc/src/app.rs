//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use primecalc_cli::presenter::{CLIResultPresenter, ResultPresenter};
use primecalc_cli::ui;
use primecalc_core::search::{analyze_comparison, run_all, run_search};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        primecalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)
}

/// Run a search and write its result to `out`.
pub fn run_with_output(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let method = config.method()?;
    let bounds = config.bounds();
    debug!(?config, "configuration parsed");

    let presenter = CLIResultPresenter::new(config.verbose, config.json);

    let report = if config.verify {
        let reports = run_all(bounds);
        presenter.present_comparison(&reports);
        analyze_comparison(&reports).context("verification failed")?;
        if config.verbose {
            ui::print_success("slow and fast finders agree");
        }
        reports
            .into_iter()
            .find(|r| r.method == method)
            .ok_or_else(|| anyhow!("no result for method {method}"))?
    } else {
        run_search(method, bounds)
    };

    presenter
        .present_report(out, &report)
        .context("failed to write primes")?;
    Ok(())
}
