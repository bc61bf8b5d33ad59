//! Command-line front end: `create` compiles a sorted word list into a
//! packed DAWG file, `dump` decompiles one back into text.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;

use dawgpack::dawg::{compile_dawg, Dawg};

#[derive(Parser)]
#[command(
    name = "dawgpack",
    version,
    about = "Compile and decompile packed DAWG word-list files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a sorted word list into a packed graph file.
    Create {
        /// Input text file, or '-' for standard input.
        input: String,
        /// Output graph file.
        output: PathBuf,
    },
    /// Decompile a packed graph file back into its word list.
    Dump {
        /// Input graph file.
        input: PathBuf,
        /// Output text file; standard output is used if it cannot be opened.
        output: PathBuf,
    },
}

fn init_tracing() {
    // Without an installed subscriber `RUST_LOG=...` has no effect. The
    // default keeps only error events so regular runs keep both streams
    // byte-clean.
    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "error".into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    // A failed parse (unknown command, wrong arity, --help) prints the
    // usage banner on stderr and exits 0; scripted callers treat that as
    // a no-op, not a failure.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::SUCCESS;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Create { input, output } => {
            let dawg = if input == "-" {
                compile_dawg(io::stdin().lock())?
            } else {
                let file =
                    File::open(&input).with_context(|| format!("cannot open {input}"))?;
                compile_dawg(BufReader::new(file))?
            };

            let file = File::create(&output)
                .with_context(|| format!("cannot create {}", output.display()))?;
            let mut out = BufWriter::new(file);
            dawg.save(&mut out)?;
            out.flush()?;
        }

        Commands::Dump { input, output } => {
            let file = File::open(&input)
                .with_context(|| format!("cannot open {}", input.display()))?;
            let dawg = Dawg::load(BufReader::new(file))?;

            match File::create(&output) {
                Ok(file) => {
                    let mut out = BufWriter::new(file);
                    dawg.dump(&mut out)?;
                    out.flush()?;
                }
                Err(err) => {
                    warn!(
                        path = %output.display(),
                        %err,
                        "cannot open output file, writing to standard output"
                    );
                    let stdout = io::stdout();
                    let mut out = BufWriter::new(stdout.lock());
                    dawg.dump(&mut out)?;
                    out.flush()?;
                }
            }
        }
    }
    Ok(())
}
