//! srcset CLI
//!
//! Parses a `srcset` attribute value and prints it back in canonical form.
//!
//! Usage:
//!   srcset '<srcset>'           Print the canonical serialization
//!   srcset --file <path>        Read the attribute value from a file
//!   srcset '<srcset>' --json    Print the candidate list as JSON
//!   srcset '<srcset>' -c        Print one line per candidate
//!   srcset '<srcset>' -v        Also report dropped candidates on stderr

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use srcset::{Candidate, ParseIssue, SrcSet};
use srcset_common::warning::{clear_warnings, warn_once};

/// srcset — parse and normalize HTML `srcset` attribute values
#[derive(Parser, Debug)]
#[command(name = "srcset")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Normalize whitespace, separators and descriptor order
    srcset 'a.png 1h 1w ,, b.png   2x'

    # Inspect the parsed candidates
    srcset --json 'a.png 100w, b.png 200w'

    # See which candidates were dropped and why
    srcset -v 'a.png 1x 1w, b.png 2x'
"#)]
struct Cli {
    /// The attribute value to parse
    #[arg(value_name = "SRCSET", required_unless_present = "file")]
    srcset: Option<String>,

    /// Read the attribute value from a file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "srcset")]
    file: Option<PathBuf>,

    /// Print the candidate list as JSON
    #[arg(short, long, conflicts_with = "candidates")]
    json: bool,

    /// Print one line per accepted candidate
    #[arg(short, long)]
    candidates: bool,

    /// Report dropped candidates on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = match (&cli.srcset, &cli.file) {
        (Some(srcset), _) => srcset.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        // clap enforces that one of the two is present.
        (None, None) => String::new(),
    };

    let mut srcset = SrcSet::new(raw);
    let candidates = srcset.parse().to_vec();

    if cli.verbose {
        clear_warnings();
        for issue in srcset.issues() {
            warn_once("Parser", &describe_issue(issue));
        }
    }

    let mut out = io::stdout().lock();
    if cli.json {
        let json = serde_json::to_string_pretty(&candidates)
            .context("failed to serialize candidates")?;
        writeln!(out, "{json}")?;
    } else if cli.candidates {
        for (index, candidate) in candidates.iter().enumerate() {
            writeln!(out, "{}", format_candidate(index, candidate))?;
        }
    } else {
        writeln!(out, "{}", srcset.stringify()?)?;
    }

    Ok(())
}

/// One line describing a dropped candidate.
fn describe_issue(issue: &ParseIssue) -> String {
    format!(
        "dropped `{}` at position {}: {}",
        issue.url, issue.position, issue.error
    )
}

/// One colored line for an accepted candidate.
fn format_candidate(index: usize, candidate: &Candidate) -> String {
    let mut line = format!("{:>3}  {}", index + 1, candidate.url.cyan());
    for (label, value) in [
        ("width", &candidate.width),
        ("density", &candidate.density),
        ("height", &candidate.height),
    ] {
        if let Some(value) = value {
            line.push_str(&format!("  {label}={}", value.green()));
        }
    }
    line
}
