// Output adapters: render a `TypoMap` as text, CSV or JSON.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use dnshuffler_typo::TypoMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::CliError;
use crate::args::OutputFormat;

/// Write `typos` to `out` in `format`.
///
/// `grouped` only affects the text format.
pub fn write_typos<W: Write>(
    typos: &TypoMap,
    format: OutputFormat,
    grouped: bool,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text if grouped => write_grouped(typos, out),
        OutputFormat::Text => write_text(typos, out),
        OutputFormat::Csv => write_csv(typos, out),
        OutputFormat::Json => write_json(typos, out),
    }
}

fn write_text<W: Write>(typos: &TypoMap, out: &mut W) -> io::Result<()> {
    for (_, candidate) in typos.pairs() {
        writeln!(out, "{candidate}")?;
    }
    Ok(())
}

fn write_grouped<W: Write>(typos: &TypoMap, out: &mut W) -> io::Result<()> {
    for (domain, candidates) in typos.iter() {
        writeln!(out, "Typos for {domain}:")?;
        for candidate in candidates {
            writeln!(out, "{candidate}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_csv<W: Write>(typos: &TypoMap, out: &mut W) -> io::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    for (domain, candidate) in typos.pairs() {
        writer.write_record([domain, candidate])?;
    }
    writer.flush()
}

fn write_json<W: Write>(typos: &TypoMap, out: &mut W) -> io::Result<()> {
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut *out, PrettyFormatter::with_indent(b"    "));
    typos.serialize(&mut serializer)?;
    writeln!(out)
}

/// Render `typos` and write it to `destination`, or standard output when
/// `None`.
///
/// The whole document is rendered before the destination is touched, so a
/// failure never leaves partial output behind.
pub fn write_output(
    typos: &TypoMap,
    format: OutputFormat,
    grouped: bool,
    destination: Option<&Path>,
) -> Result<(), CliError> {
    let mut buf = Vec::new();
    write_typos(typos, format, grouped, &mut buf).map_err(|e| CliError::OutputWrite {
        destination: describe(destination),
        source: e,
    })?;

    let written = match destination {
        Some(path) => fs::write(path, &buf),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&buf).and_then(|()| stdout.flush())
        }
    };
    written.map_err(|e| CliError::OutputWrite {
        destination: describe(destination),
        source: e,
    })
}

fn describe(destination: Option<&Path>) -> String {
    match destination {
        Some(path) => path.display().to_string(),
        None => "standard output".to_string(),
    }
}
