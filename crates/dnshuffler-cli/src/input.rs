// Domain input sources: arguments, a file or inline list, standard input.

use std::fs;
use std::io::{self, BufRead, IsTerminal};

use crate::CliError;
use crate::args::Args;

/// Where the domains for a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainSource {
    /// Positional `DOMAIN` arguments.
    Args(Vec<String>),
    /// A `--domains` value: a file path or a comma-separated list.
    ListOrFile(String),
    /// Standard input, one domain per line.
    Stdin,
}

impl DomainSource {
    /// Pick the source for `args`: positional domains first, then
    /// `--domains`, then standard input.
    pub fn from_args(args: &Args) -> Self {
        if !args.domains.is_empty() {
            DomainSource::Args(args.domains.clone())
        } else if let Some(value) = &args.domain_source {
            DomainSource::ListOrFile(value.clone())
        } else {
            DomainSource::Stdin
        }
    }

    /// Read the domains, trimmed and with blank entries removed.
    pub fn read(&self) -> Result<Vec<String>, CliError> {
        match self {
            DomainSource::Args(domains) => Ok(clean(domains.iter().map(String::as_str))),
            DomainSource::ListOrFile(value) => read_list_or_file(value),
            DomainSource::Stdin => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    return Err(CliError::NoInput);
                }
                let domains = read_lines(stdin.lock()).map_err(|e| CliError::InputSource {
                    source_name: "standard input".to_string(),
                    source: e,
                })?;
                if domains.is_empty() {
                    return Err(CliError::NoInput);
                }
                Ok(domains)
            }
        }
    }
}

/// Trim entries and drop blank ones.
fn clean<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<String> {
    entries
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read one domain per line from `reader`, skipping blank lines.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut domains = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let domain = line.trim();
        if !domain.is_empty() {
            domains.push(domain.to_string());
        }
    }
    Ok(domains)
}

/// Interpret a `--domains` value.
///
/// An existing path is read as a file (one domain per line); a path that
/// exists but cannot be read is an error. Otherwise the value is split on
/// commas.
pub fn read_list_or_file(value: &str) -> Result<Vec<String>, CliError> {
    match fs::read_to_string(value) {
        Ok(text) => Ok(clean(text.lines())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let domains = clean(value.split(','));
            if domains.is_empty() {
                return Err(CliError::EmptyDomainList(value.to_string()));
            }
            Ok(domains)
        }
        Err(e) => Err(CliError::InputSource {
            source_name: value.to_string(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    #[test]
    fn read_lines_skips_blanks_and_trims() {
        let input = Cursor::new("example.com\n\n  test.org  \r\n\t\n");
        assert_eq!(read_lines(input).unwrap(), vec!["example.com", "test.org"]);
    }

    #[test]
    fn inline_list_is_split_on_commas() {
        let domains = read_list_or_file("a.com, b.com,,c.com").unwrap();
        assert_eq!(domains, vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn single_domain_without_comma() {
        assert_eq!(read_list_or_file("nosuchfile-example.com").unwrap(), vec!["nosuchfile-example.com"]);
    }

    #[test]
    fn empty_list_is_an_error() {
        assert!(matches!(read_list_or_file(" , ,"), Err(CliError::EmptyDomainList(_))));
    }

    #[test]
    fn source_precedence() {
        let args = Args::try_parse_from(["dnshuffler", "-d", "x.com", "a.com"]).unwrap();
        assert_eq!(DomainSource::from_args(&args), DomainSource::Args(vec!["a.com".into()]));
        let args = Args::try_parse_from(["dnshuffler", "-d", "x.com"]).unwrap();
        assert_eq!(DomainSource::from_args(&args), DomainSource::ListOrFile("x.com".into()));
        let args = Args::try_parse_from(["dnshuffler"]).unwrap();
        assert_eq!(DomainSource::from_args(&args), DomainSource::Stdin);
    }
}
