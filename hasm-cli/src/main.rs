use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use hasm::Word;
use tracing_subscriber::EnvFilter;

/// Assembles Hack assembly into binary machine code, one word per line.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Hack assembly source (`.asm`)
    input: PathBuf,

    /// Write machine code to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let src = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let words = hasm::assemble(&src).map_err(|e| e.with_path(&cli.input))?;
    tracing::info!(
        input = %cli.input.display(),
        words = words.len(),
        "assembled"
    );

    match &cli.output {
        Some(path) => write_file(path, &words)?,
        None => write_words(io::stdout().lock(), &words).context("failed to write stdout")?,
    }
    Ok(())
}

/// Writes next to `path` first so a failed write leaves any old output intact.
fn write_file(path: &Path, words: &[Word]) -> anyhow::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let written = fs::File::create(&tmp)
        .and_then(|file| write_words(BufWriter::new(file), words))
        .with_context(|| format!("failed to write {}", tmp.display()));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to move {} to {}", tmp.display(), path.display()))
}

fn write_words(mut out: impl Write, words: &[Word]) -> io::Result<()> {
    for word in words {
        writeln!(out, "{word}")?;
    }
    out.flush()
}
