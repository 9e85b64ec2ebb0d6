use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use bookstats::{load_document, render_json, render_text, BookReport, OutputFormat, WordMode};

const SLOW_FILE_SECS: f64 = 1.0; // report timing for files slower than this

/// Word count and letter frequencies for text files
#[derive(Parser, Debug)]
#[command(name = "bookstats", version, about)]
struct Args {
    /// Text files to analyze
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// How words are counted
    #[arg(long, value_enum, default_value_t = WordMode::Whitespace)]
    words: WordMode,

    /// Only list the N most frequent letters
    #[arg(long)]
    top: Option<usize>,
}

/// One analyzed file: the rendered report and whether decoding was lossy
struct Analyzed {
    rendered: String,
    lossy: bool,
}

fn analyze_file(path: &Path, args: &Args) -> Result<Analyzed> {
    let start = Instant::now();
    let doc = load_document(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut report = BookReport::analyze(path.display().to_string(), &doc.text, args.words);
    if let Some(n) = args.top {
        report.truncate_to_top(n);
    }

    let rendered = match args.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => render_json(&report)
            .with_context(|| format!("failed to encode report for {}", path.display()))?,
    };

    let elapsed = start.elapsed();
    if elapsed.as_secs_f64() > SLOW_FILE_SECS {
        eprintln!("Analyzed {} ({} words) in {:.2?}", path.display(), report.word_count, elapsed);
    }
    Ok(Analyzed { rendered, lossy: doc.lossy })
}

/// Analyze every path in parallel and write reports in argument order.
/// Returns the number of files that failed.
fn run(args: &Args, out: &mut impl Write, err: &mut impl Write) -> io::Result<usize> {
    let results: Vec<Result<Analyzed>> = args
        .paths
        .par_iter()
        .map(|path| analyze_file(path, args))
        .collect();

    let mut failed = 0;
    for (path, result) in args.paths.iter().zip(results) {
        match result {
            Ok(analyzed) => {
                if analyzed.lossy {
                    writeln!(err, "Warning: {} has undecodable bytes, replaced with U+FFFD", path.display())?;
                }
                write!(out, "{}", analyzed.rendered)?;
                if args.format == OutputFormat::Json {
                    writeln!(out)?;
                }
            }
            Err(e) => {
                writeln!(err, "Error: {:#}", e)?;
                failed += 1;
            }
        }
    }

    if failed > 0 {
        writeln!(err, "{} of {} files failed", failed, args.paths.len())?;
    }
    Ok(failed)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&args, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            ExitCode::FAILURE
        }
    }
}
