// dnshuffler-cli: argument parsing, input sources and output adapters for
// the dnshuffler binary.

pub mod args;
pub mod input;
pub mod logging;
pub mod output;

use std::io;
use std::process;

use dnshuffler_core::domain::DomainError;
use dnshuffler_typo::{Shuffler, TypoReport};

pub use args::{Args, OutputFormat};
pub use input::{DomainSource, read_lines, read_list_or_file};
pub use logging::init_logging;
pub use output::{write_output, write_typos};

/// Errors that end a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// No domains on the command line and standard input is a terminal or
    /// empty.
    #[error("no input domains")]
    NoInput,

    #[error("failed to read {source_name}: {source}")]
    InputSource {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("no domains in list `{0}`")]
    EmptyDomainList(String),

    #[error("failed to write {destination}: {source}")]
    OutputWrite {
        destination: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Malformed(#[from] DomainError),
}

/// Read the domains selected by `args`.
pub fn read_domains(args: &Args) -> Result<Vec<String>, CliError> {
    let source = DomainSource::from_args(args);
    tracing::debug!(?source, "reading domains");
    source.read()
}

/// Run generation over `domains` with the options in `args`.
///
/// With `--strict` the first malformed domain fails the whole run.
pub fn generate(args: &Args, domains: &[String]) -> Result<TypoReport, CliError> {
    let shuffler = Shuffler::new(args.shuffler_options());
    let report = if args.strict {
        shuffler.generate_strict(domains)?
    } else {
        shuffler.generate(domains)
    };

    if !report.is_complete() {
        tracing::warn!(
            skipped = report.skipped.len(),
            "some domains were malformed and produced no candidates"
        );
    }
    tracing::info!(
        methods = %shuffler.options().methods,
        domains = report.typos.len(),
        candidates = report.typos.candidate_count(),
        skipped = report.skipped.len(),
        dropped = report.dropped,
        "generation finished"
    );
    Ok(report)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
