//! Application configuration from CLI flags and environment.

use clap::{CommandFactory, Parser};

use primecalc_core::{Method, PrimeError, SearchBounds};

/// Find prime numbers by trial division.
#[derive(Parser, Debug)]
#[command(name = "primecalc", version, about)]
pub struct AppConfig {
    /// Algorithm: 0 = slow (divide by every smaller integer), 1 = fast (divide by found primes).
    #[arg(short, long, default_value = "0", value_parser = clap::value_parser!(i64).range(0..=1))]
    pub method: i64,

    /// Stop searching once candidates exceed this limit.
    #[arg(
        short,
        long,
        default_value = "100000",
        env = "PRIMECALC_LIMIT",
        allow_negative_numbers = true
    )]
    pub limit: i64,

    /// Stop searching once this many primes have been found.
    #[arg(
        short = 'n',
        long,
        default_value = "100",
        env = "PRIMECALC_NUMPRIMES",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(..=1_000_000)
    )]
    pub numprimes: i64,

    /// Report the algorithm and elapsed time on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Run both algorithms and fail if they disagree.
    #[arg(long)]
    pub verify: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments. Parse failures print the error and the usage
    /// line to stderr and exit with clap's status (2).
    #[must_use]
    pub fn parse() -> Self {
        match <Self as Parser>::try_parse() {
            Ok(config) => config,
            Err(err) if err.use_stderr() => {
                eprint!("{}", Self::render_parse_error(&err));
                std::process::exit(err.exit_code());
            }
            // --help and --version
            Err(err) => err.exit(),
        }
    }

    /// Render a parse error, appending the usage line when clap left it out.
    #[must_use]
    pub fn render_parse_error(err: &clap::Error) -> String {
        let message = err.render().to_string();
        if message.contains("Usage:") {
            return message;
        }
        format!(
            "{}\n\n{}\n",
            message.trim_end(),
            Self::command().render_usage()
        )
    }

    /// The selected algorithm.
    pub fn method(&self) -> Result<Method, PrimeError> {
        Method::from_code(self.method)
    }

    /// Search bounds; negative values clamp to zero.
    #[must_use]
    pub fn bounds(&self) -> SearchBounds {
        SearchBounds::from_signed(self.limit, self.numprimes)
    }
}
