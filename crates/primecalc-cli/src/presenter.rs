//! CLI result presenter.

use std::io::{self, Write};

use primecalc_core::search::SearchReport;

use crate::output::{format_duration, format_json, write_primes};
use crate::ui;

/// Trait for presenting search results to the user.
pub trait ResultPresenter {
    /// Present the result of a search on `out`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    fn present_report(&self, out: &mut dyn Write, report: &SearchReport) -> io::Result<()>;

    /// Present a comparison of several searches over the same bounds.
    fn present_comparison(&self, reports: &[SearchReport]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// CLI result presenter. Results go to the given writer, diagnostics to
/// stderr.
pub struct CLIResultPresenter {
    verbose: bool,
    json: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn summary(report: &SearchReport) -> String {
        format!(
            "{} ({}) found {} primes <= {} in {}",
            report.method.finder_name(),
            report.method,
            report.count(),
            report.bounds.max_int,
            format_duration(report.duration),
        )
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_report(&self, out: &mut dyn Write, report: &SearchReport) -> io::Result<()> {
        if self.verbose {
            ui::print_info(&Self::summary(report));
        }

        if self.json {
            let json = format_json(report).map_err(io::Error::other)?;
            writeln!(out, "{json}")?;
        } else {
            write_primes(out, &report.primes)?;
        }
        out.flush()
    }

    fn present_comparison(&self, reports: &[SearchReport]) {
        if !self.verbose {
            return;
        }
        for report in reports {
            ui::print_info(&Self::summary(report));
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
