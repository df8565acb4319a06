//! listmaker CLI - view and edit CSV lists from the shell

mod ops;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use listmaker::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use crate::ops::EditOp;

#[derive(Parser)]
#[command(name = "listmaker")]
#[command(author, version, about = "View and edit labeled CSV lists")]
struct Cli {
    /// Log debug details to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Input {
    /// Input file (csv, tsv, psv)
    input: PathBuf,

    /// Treat the first record as data instead of column labels
    #[arg(long)]
    no_header: bool,

    /// Input field delimiter (default: from the file extension)
    #[arg(long)]
    input_delimiter: Option<char>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the table as aligned text
    Print(Input),

    /// Show the dimensions and labels of a table
    Info(Input),

    /// Apply edits in order and write the result to stdout or a file
    Edit {
        #[command(flatten)]
        input: Input,

        /// Edit to apply, e.g. `insert-row:1` or `set:0:2=pears` (repeatable)
        #[arg(long = "op", required = true)]
        ops: Vec<EditOp>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output field delimiter (default: the input delimiter)
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Rewrite a table with a different delimiter
    Convert {
        #[command(flatten)]
        input: Input,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Output field delimiter (default: from the output extension)
        #[arg(short, long)]
        delimiter: Option<char>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Print(input) => print_table(&input),
        Commands::Info(input) => show_info(&input),
        Commands::Edit {
            input,
            ops,
            output,
            delimiter,
        } => edit(&input, &ops, output.as_deref(), delimiter),
        Commands::Convert {
            input,
            output,
            delimiter,
        } => convert(&input, &output, delimiter),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn open(input: &Input) -> Result<Editor> {
    let mut options = CsvReadOptions::for_path(&input.input);
    options.has_header = !input.no_header;
    if let Some(c) = input.input_delimiter {
        options.delimiter = delimiter_byte(c)?;
    }

    let mut editor = Editor::new();
    editor.set_read_options(options);
    editor
        .on_load_requested(&input.input)
        .with_context(|| format!("Failed to open '{}'", input.input.display()))?;
    Ok(editor)
}

/// Write options for `path`, with an explicit delimiter taking precedence
/// over the one implied by the extension
fn write_options(path: &Path, delimiter: Option<char>) -> Result<CsvWriteOptions> {
    let mut options = CsvWriteOptions::for_path(path);
    if let Some(c) = delimiter {
        options.delimiter = delimiter_byte(c)?;
    }
    Ok(options)
}

fn delimiter_byte(c: char) -> Result<u8> {
    if !c.is_ascii() {
        bail!("delimiter must be a single ASCII character, got '{c}'");
    }
    Ok(c as u8)
}

fn print_table(input: &Input) -> Result<()> {
    let editor = open(input)?;
    println!("{}", editor.on_print_requested());
    Ok(())
}

fn show_info(input: &Input) -> Result<()> {
    let editor = open(input)?;
    let table = editor.table();

    println!("File: {}", input.input.display());
    println!(
        "Size: {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );
    println!();
    for (i, label) in table.column_labels().iter().enumerate() {
        println!("  Column {}: \"{}\"", i, label);
    }

    Ok(())
}

fn edit(
    input: &Input,
    ops: &[EditOp],
    output: Option<&Path>,
    delimiter: Option<char>,
) -> Result<()> {
    let mut editor = open(input)?;
    editor.controller_mut().subscribe(LoggingObserver);

    for (i, op) in ops.iter().enumerate() {
        debug!(%op, "applying edit");
        op.apply(editor.controller_mut())
            .with_context(|| format!("Edit {} (`{}`) failed", i + 1, op))?;
    }

    let delimiter = delimiter.or(input.input_delimiter);
    match output {
        Some(path) => {
            editor.set_write_options(write_options(path, delimiter)?);
            editor
                .on_save_requested(path)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!(
                "Wrote {} rows to '{}'",
                editor.table().row_count(),
                path.display()
            );
        }
        None => {
            let options = write_options(&input.input, delimiter)?;
            let text = CsvWriter::write_string(editor.table(), &options)
                .context("Failed to encode table")?;
            io::stdout()
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

fn convert(input: &Input, output: &Path, delimiter: Option<char>) -> Result<()> {
    let mut editor = open(input)?;

    editor.set_write_options(write_options(output, delimiter)?);

    editor
        .on_save_requested(output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    eprintln!(
        "Wrote {} rows to '{}'",
        editor.table().row_count(),
        output.display()
    );
    Ok(())
}
