use anyhow::{anyhow, bail, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use yamldig::config::Config;
use yamldig::document::tree::Document;
use yamldig::file::loader::{load_file, load_stdin};
use yamldig::path::parse_path;
use yamldig::render::write_sorted;
use yamldig::trace::{Discard, TraceSink, WriterSink};

/// yamldig - query and canonically sort YAML/JSON documents
#[derive(Parser)]
#[command(name = "yamldig")]
#[command(version)]
#[command(about = "Query and canonically sort YAML/JSON documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path against a document and print the value found there
    Get(GetArgs),

    /// Print a whole document with mapping keys sorted
    Sort(SortArgs),
}

#[derive(Args)]
struct GetArgs {
    /// Input file; omit it (with piped input) or pass '-' to read stdin
    file: Option<String>,

    /// Path to resolve, e.g. 'spec/containers/0/image'; may be repeated
    #[arg(short, long)]
    key: Vec<String>,

    /// Wrap the result in a single-entry container keyed by the final path step
    #[arg(long)]
    include: bool,

    /// Render container results as sorted pretty-printed JSON
    #[arg(long)]
    json: bool,

    /// Trim surrounding whitespace from the output
    #[arg(short = 'n')]
    trim: bool,

    /// Suppress the rendered context printed under path errors
    #[arg(long)]
    silent: bool,

    /// 1-based document to query in a multi-document stream
    #[arg(short, long)]
    document: Option<usize>,

    /// Report navigation steps on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args)]
struct SortArgs {
    /// Input file; omit it (with piped input) or pass '-' to read stdin
    file: Option<String>,

    /// 1-based document to print from a multi-document stream
    #[arg(short, long)]
    document: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Get(args) => cmd_get(&Config::load(), args),
        Commands::Sort(args) => cmd_sort(args),
    }
}

fn cmd_get(config: &Config, args: GetArgs) -> Result<ExitCode> {
    let mut sink: Box<dyn TraceSink> = if args.verbose {
        Box::new(WriterSink::new(io::stderr()))
    } else {
        Box::new(Discard)
    };

    let document = load_selected(sink.as_mut(), &args.file, args.document)?;

    // Each -k value is its own slash path; repeated flags concatenate.
    let mut segments: Vec<String> = Vec::new();
    for key in &args.key {
        segments.extend(parse_path(key));
    }
    sink.note(&format!("query: path '{}'", segments.join("/")));

    let as_json = args.json || config.format == "json";
    let result = if as_json {
        document.get_json_with(sink.as_mut(), args.include, &segments)
    } else {
        document.get_string_with(sink.as_mut(), args.include, &segments)
    };

    let trim = args.trim || config.trim;
    let silent = args.silent || config.silent;

    match result {
        Ok(value) => {
            let mut stdout = io::stdout().lock();
            if trim {
                write!(stdout, "{}", value.trim())?;
            } else {
                write!(stdout, "{}", value)?;
            }
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            if !silent {
                if let Some(rendered) = err.rendered() {
                    // eprintln supplies the final newline.
                    let rendered = if trim {
                        rendered.trim()
                    } else {
                        rendered.trim_end_matches('\n')
                    };
                    eprintln!(">\t{}", rendered.replace('\n', "\n>\t"));
                }
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_sort(args: SortArgs) -> Result<ExitCode> {
    let mut sink = Discard;
    let document = load_selected(&mut sink, &args.file, args.document)?;

    let mut stdout = io::stdout().lock();
    write_sorted(&mut stdout, document.root(), 0)?;
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

/// Load all documents from the file (or stdin) and pick the requested one.
fn load_selected(
    sink: &mut dyn TraceSink,
    file: &Option<String>,
    selector: Option<usize>,
) -> Result<Document> {
    let documents = match file.as_deref() {
        Some("-") => {
            sink.note("input: reading stdin");
            load_stdin()?
        }
        Some(path) => {
            sink.note(&format!("input: reading file '{}'", path));
            load_file(path)?
        }
        None => {
            if io::stdin().is_terminal() {
                bail!("No input: pass a file argument or pipe a document to stdin");
            }
            sink.note("input: reading stdin");
            load_stdin()?
        }
    };

    let count = documents.len();
    if count == 0 {
        bail!("No YAML documents found in input");
    }

    let picked = selector.unwrap_or_else(|| {
        if count > 1 {
            eprintln!(
                "WARNING: input contains {} YAML documents; use --document to select one, returning the first",
                count
            );
        }
        1
    });
    if picked == 0 {
        bail!("Wrong document number: 0 (numbering starts at 1)");
    }
    documents
        .into_iter()
        .nth(picked - 1)
        .ok_or_else(|| anyhow!("Wrong document number: {} (input has {})", picked, count))
}
