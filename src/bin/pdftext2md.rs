//! CLI binary for pdftext2md.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use pdftext2md::{
    convert, convert_text, convert_to_file, inspect, ConversionConfig, PageSelection,
};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (stdout)
  pdftext2md document.pdf

  # Convert to file
  pdftext2md document.pdf -o output.md

  # Specific pages only
  pdftext2md --pages 3-15 report.pdf -o report.md

  # Convert from URL
  pdftext2md https://example.com/whitepaper.pdf -o whitepaper.md

  # Inspect PDF metadata (page count, title guess), no conversion
  pdftext2md --inspect-only document.pdf

  # Convert already-extracted text (file or stdin)
  pdftext2md --from-text notes.txt
  pdftotext document.pdf - | pdftext2md --from-text -

  # JSON output with YAML front matter in the markdown
  pdftext2md --json --metadata document.pdf > output.json

HOW STRUCTURE IS INFERRED:
  Heading level 1   CHAPTER 1: / TITLE: / PART 2: prefixes, ALL-CAPS lines
                    ending in a colon (INTRODUCTION:)
  Heading level 2   SECTION A: / APPENDIX B: / Section 1.1: prefixes,
                    numbered sections (1.1 Overview)
  Ordered list      lines like "1. First step" (kept verbatim)
  Unordered list    bullet glyphs • · ‣ ⁃ (rewritten to "- ")
  Paragraphs        everything else, separated by single blank lines

  The same input always produces the same output: the converter is a pure
  function with no models and no network access (except URL download).
"#;

/// Convert PDF files and URLs to structured Markdown.
#[derive(Parser, Debug)]
#[command(
    name = "pdftext2md",
    version,
    about = "Convert PDF files and URLs to structured Markdown using deterministic heuristics",
    long_about = "Convert PDF documents (local files or URLs) to Markdown. Document structure \
— headings, ordered and unordered lists, paragraph breaks — is inferred from lexical cues \
in the extracted text. No OCR, no LLMs, no API keys: conversion is deterministic and offline.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file path, HTTP/HTTPS URL, or "-" with --from-text.
    input: String,

    /// Write Markdown to this file instead of stdout.
    #[arg(short, long, env = "PDFTEXT2MD_OUTPUT")]
    output: Option<PathBuf>,

    /// Page selection: all, 5, 3-15, or 1,3,5,7.
    #[arg(long, env = "PDFTEXT2MD_PAGES", default_value = "all")]
    pages: String,

    /// Prepend YAML front matter with the title guess and page count.
    #[arg(long, env = "PDFTEXT2MD_METADATA")]
    metadata: bool,

    /// Output structured JSON (markdown + metadata + stats) instead of Markdown.
    #[arg(long, env = "PDFTEXT2MD_JSON")]
    json: bool,

    /// Print PDF metadata only, no conversion.
    #[arg(long)]
    inspect_only: bool,

    /// Treat the input as already-extracted plain text ("-" reads stdin).
    #[arg(long)]
    from_text: bool,

    /// HTTP download timeout in seconds.
    #[arg(long, env = "PDFTEXT2MD_DOWNLOAD_TIMEOUT", default_value_t = 120)]
    download_timeout: u64,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDFTEXT2MD_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDFTEXT2MD_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Text mode: bare heuristic core, no PDF involved ──────────────────
    if cli.from_text {
        let raw = if cli.input == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        } else {
            std::fs::read_to_string(&cli.input)
                .with_context(|| format!("Failed to read text file '{}'", cli.input))?
        };

        let markdown = convert_text(&raw);
        write_markdown(&cli, &markdown)?;
        return Ok(());
    }

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let meta = inspect(&cli.input).context("Failed to inspect PDF")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&meta).context("Failed to serialise metadata")?
            );
        } else {
            println!("File:   {}", cli.input);
            if let Some(ref t) = meta.title {
                println!("Title:  {}", t);
            }
            println!("Pages:  {}", meta.page_count);
        }
        return Ok(());
    }

    // ── Build config ─────────────────────────────────────────────────────
    let config = ConversionConfig::builder()
        .pages(parse_pages(&cli.pages)?)
        .include_metadata(cli.metadata)
        .download_timeout_secs(cli.download_timeout)
        .build()
        .context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let stats = convert_to_file(&cli.input, output_path, &config)
            .context("Conversion failed")?;

        if !cli.quiet {
            eprintln!(
                "{}  {}/{} pages  {}ms  →  {}",
                green("✔"),
                stats.selected_pages,
                stats.total_pages,
                stats.total_duration_ms,
                bold(&output_path.display().to_string()),
            );
            eprintln!(
                "   {} chars in  /  {} chars out",
                dim(&stats.input_chars.to_string()),
                dim(&stats.output_chars.to_string()),
            );
        }
    } else {
        let output = convert(&cli.input, &config).context("Conversion failed")?;

        if cli.json {
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
            println!("{json}");
        } else {
            write_markdown(&cli, &output.markdown)?;
        }

        if !cli.quiet && !cli.json {
            eprintln!(
                "Converted {}/{} pages in {}ms",
                output.stats.selected_pages,
                output.stats.total_pages,
                output.stats.total_duration_ms
            );
        }
    }

    Ok(())
}

/// Write markdown to `-o <file>` or stdout, ensuring a trailing newline.
fn write_markdown(cli: &Cli, markdown: &str) -> Result<()> {
    if let Some(ref path) = cli.output {
        let mut contents = markdown.to_string();
        if !contents.ends_with('\n') {
            contents.push('\n');
        }
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(markdown.as_bytes())
            .context("Failed to write to stdout")?;
        if !markdown.ends_with('\n') {
            handle.write_all(b"\n").ok();
        }
    }
    Ok(())
}

/// Parse `--pages` string into `PageSelection`.
fn parse_pages(s: &str) -> Result<PageSelection> {
    let s = s.trim().to_lowercase();

    if s == "all" {
        return Ok(PageSelection::All);
    }

    // Range: "3-15"
    if let Some((start, end)) = s.split_once('-') {
        let start: usize = start.trim().parse().context("Invalid start page in range")?;
        let end: usize = end.trim().parse().context("Invalid end page in range")?;

        if start < 1 {
            anyhow::bail!("Pages are 1-indexed, minimum is 1 (got {})", start);
        }
        if start > end {
            anyhow::bail!("Invalid page range '{}-{}': start must be <= end", start, end);
        }
        return Ok(PageSelection::Range(start, end));
    }

    // Set: "1,3,5,7"
    if s.contains(',') {
        let pages: Vec<usize> = s
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<usize>()
                    .context(format!("Invalid page number: '{}'", p.trim()))
            })
            .collect::<Result<Vec<_>>>()?;

        if pages.iter().any(|&p| p < 1) {
            anyhow::bail!("Pages are 1-indexed, minimum is 1");
        }
        return Ok(PageSelection::Set(pages));
    }

    // Single page: "5"
    let page: usize = s.parse().context("Invalid page number")?;
    if page < 1 {
        anyhow::bail!("Pages are 1-indexed, minimum is 1 (got {})", page);
    }
    Ok(PageSelection::Single(page))
}
