// dnshuffler: generate typosquatting candidates for domain names.
//
// Usage:
//   dnshuffler [OPTIONS] [DOMAIN]...
//   dnshuffler -d domains.txt -m omit,swap -f json -o typos.json
//   cat domains.txt | dnshuffler -f csv

use std::process;

use clap::{CommandFactory, Parser};
use dnshuffler_cli::{Args, CliError, fatal, generate, init_logging, read_domains, write_output};

fn main() {
    let args = Args::parse();
    init_logging(args.verbosity());

    let domains = match read_domains(&args) {
        Ok(domains) => domains,
        Err(CliError::NoInput) => {
            eprintln!("{}", Args::command().render_help());
            process::exit(2);
        }
        Err(e) => fatal(&e.to_string()),
    };

    let report = generate(&args, &domains).unwrap_or_else(|e| fatal(&e.to_string()));

    if let Err(e) = write_output(&report.typos, args.format, args.grouped, args.output.as_deref()) {
        fatal(&e.to_string());
    }
}
