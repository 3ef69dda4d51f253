// Command line argument parsing for the dnshuffler CLI using clap.

use clap::{ArgAction, Parser, ValueEnum};
use dnshuffler_core::domain::SplitMode;
use dnshuffler_core::method::{Method, MethodSet};
use dnshuffler_typo::ShufflerOptions;
use std::path::PathBuf;

/// dnshuffler - generate typosquatting variants of domain names
#[derive(Parser, Debug, Clone)]
#[command(name = "dnshuffler")]
#[command(about = "Generate typosquatting variants of domain names")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "\
Domains are read from DOMAIN arguments, then --domains, then standard input \
(one per line). Put DOMAIN arguments before --methods or after `--`.")]
pub struct Args {
    /// Domains to mutate, in label.extension form
    #[arg(value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Comma-separated list of domains, or a file with one domain per line
    #[arg(short = 'd', long = "domains", value_name = "LIST_OR_FILE")]
    pub domain_source: Option<String>,

    /// Mutation methods to apply: neighbor, similar, omit, duplicate, swap,
    /// neighbor_duplicate, homoglyph [default: all except homoglyph]
    #[arg(
        short,
        long,
        value_name = "METHOD",
        value_parser = str::parse::<Method>,
        num_args = 1..,
        value_delimiter = ',',
        env = "DNSHUFFLER_METHODS"
    )]
    pub methods: Vec<Method>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "DNSHUFFLER_FORMAT")]
    pub format: OutputFormat,

    /// Output file (default: standard output)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Text format only: print a "Typos for DOMAIN:" header before each group
    #[arg(long)]
    pub grouped: bool,

    /// Abort on the first malformed domain instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Accept multi-label domains: mutate the part before the first dot and
    /// keep the rest (e.g. `example.co.uk`)
    #[arg(long)]
    pub split_first_dot: bool,

    /// Maximum number of candidates per domain
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Verbosity level (repeat for more: -v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode: only errors are logged (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=info, ...).
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// The enabled method set; [`MethodSet::DEFAULT`] when none were given.
    pub fn method_set(&self) -> MethodSet {
        if self.methods.is_empty() {
            MethodSet::DEFAULT
        } else {
            self.methods.iter().copied().collect()
        }
    }

    /// Options for the generator.
    pub fn shuffler_options(&self) -> ShufflerOptions {
        ShufflerOptions {
            methods: self.method_set(),
            split_mode: if self.split_first_dot {
                SplitMode::FirstDot
            } else {
                SplitMode::SingleDot
            },
            max_candidates: self.limit,
        }
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One candidate domain per line
    Text,
    /// `original,candidate` rows without a header
    Csv,
    /// Object mapping each domain to its candidates
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("dnshuffler").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = parse(&["example.com"]);
        assert_eq!(args.domains, vec!["example.com"]);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.method_set(), MethodSet::DEFAULT);
        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.shuffler_options().split_mode, SplitMode::SingleDot);
    }

    #[test]
    fn methods_space_and_comma_separated() {
        let args = parse(&["-m", "omit", "swap,neighbor_duplicate"]);
        assert_eq!(
            args.method_set(),
            MethodSet::from_methods([Method::Omit, Method::Swap, Method::NeighborDuplicate])
        );
    }

    #[test]
    fn unknown_method_is_an_error() {
        let err = Args::try_parse_from(["dnshuffler", "-m", "omit,bogus"]).unwrap_err();
        assert!(err.to_string().contains("unknown method `bogus`"), "{err}");
    }

    #[test]
    fn hyphenated_method_name() {
        let args = parse(&["-m", "neighbor-duplicate"]);
        assert_eq!(args.method_set(), MethodSet::EMPTY.with(Method::NeighborDuplicate));
    }

    #[test]
    fn homoglyph_is_opt_in() {
        let args = parse(&["-m", "homoglyph"]);
        assert_eq!(args.method_set(), MethodSet::EMPTY.with(Method::Homoglyph));
    }

    #[test]
    fn format_output_and_flags() {
        let args = parse(&[
            "-d", "a.com,b.com", "-f", "json", "-o", "out.json", "--strict", "--split-first-dot",
            "-n", "5", "-vv",
        ]);
        assert_eq!(args.domain_source.as_deref(), Some("a.com,b.com"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert!(args.strict);
        let options = args.shuffler_options();
        assert_eq!(options.split_mode, SplitMode::FirstDot);
        assert_eq!(options.max_candidates, Some(5));
        assert_eq!(args.verbosity(), 3);
    }

    #[test]
    fn quiet_overrides_verbose() {
        let args = parse(&["-q", "-v"]);
        assert_eq!(args.verbosity(), 0);
    }
}
