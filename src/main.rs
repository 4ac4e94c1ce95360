//! shmd: generate a markdown API reference from annotated shell functions.
//!
//! Every `*.sh` file of a directory is scanned for `##` directives inside
//! function bodies:
//!
//! ```text
//! greet() {
//!   ##D Prints a greeting
//!   ##A name=the person to greet
//!   ##C [<name>]
//!   ##E greet Alice
//! }
//! ```
//!
//! The records of all files are merged (later files win on a name clash) and
//! written as one markdown document.

mod error;
mod model;
mod parser;
mod render;
mod sanitize;
mod sources;
mod toc;

use clap::Parser;
use error::Error;
use model::Records;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

const AFTER_HELP: &str = "\
Examples:
  shmd ~/foo ~/api.md
  shmd ~/foo ~/api.md cfg.sh,main.sh
  SHMD_PAT='*_*.sh' shmd ~/foo ~/api.md";

#[derive(Parser)]
#[command(
    name = "shmd",
    about = "Generate a markdown reference from ##-annotated shell functions",
    after_help = AFTER_HELP
)]
struct Cli {
    /// Source directory with shell files
    src_dir: PathBuf,

    /// Destination (markdown) file
    dst_file: PathBuf,

    /// Skip these comma separated source files
    black_files: Option<String>,

    /// Match other source files than *.sh
    #[arg(short, long, env = "SHMD_PAT", default_value = sources::DEFAULT_PATTERN)]
    pattern: String,

    /// Do not print progress to stderr
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", anyhow::Error::from(e));
            ExitCode::FAILURE
        }
    }
}

/// Select, extract, merge, render, write. Nothing is written unless every
/// source was processed.
fn run(cli: &Cli) -> error::Result<()> {
    let excluded = sources::parse_exclusions(cli.black_files.as_deref());
    let files = sources::select_sources(&cli.src_dir, &cli.pattern, &excluded)?;

    let mut records = Records::new();
    for path in &files {
        progress(cli.quiet, format_args!("Processing {}", path.display()));
        let content = sources::read_source(path)?;
        let found = parser::bash::parse(&content).map_err(|source| Error::Parse {
            path: path.clone(),
            source,
        })?;
        progress(cli.quiet, format_args!("{} functions found", found.len()));
        parser::merge::merge(&mut records, found);
    }

    progress(
        cli.quiet,
        format_args!(
            "Writing {} with {} functions",
            cli.dst_file.display(),
            records.len()
        ),
    );
    let document = render::markdown::render(&records);
    sources::write_document(&cli.dst_file, &document)
}

fn progress(quiet: bool, msg: fmt::Arguments<'_>) {
    if !quiet {
        eprintln!("{msg}");
    }
}
