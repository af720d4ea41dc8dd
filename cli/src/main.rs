//! authorlink CLI - turn pasted author lists into citation links
//!
//! Reads an author line from arguments, a file or stdin and prints the
//! normalized link list.

use authorlink::{AuthorLinker, AuthorList, LinkOptions, LinkStyle};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Author list normalization to citation links
#[derive(Parser)]
#[command(
    name = "authorlink",
    version,
    about = "Normalize paper author lists into citation links",
    long_about = "authorlink - Clean up author lists copied from papers.\n\n\
                  Strips footnote marks, degrees, ORCID badges, URLs and emails,\n\
                  splits on , & ; ∙ newlines and \"and\", and fixes capitalization.\n\n\
                  Usage:\n  \
                  authorlink \"John Doe1, Jane Smith*\"   Link the given text\n  \
                  pbpaste | authorlink                   Link text from stdin\n  \
                  authorlink json -i authors.txt         Emit names as JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Author list text (reads stdin when omitted)
    text: Vec<String>,

    #[command(flatten)]
    format: FormatArgs,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Options shared by every command that renders names.
#[derive(Args, Clone)]
struct FormatArgs {
    /// Link style
    #[arg(long, global = true, default_value = "bracket")]
    style: StyleMode,

    /// Delimiter placed between links
    #[arg(long, global = true, default_value = ", ")]
    delimiter: String,

    /// Compose decomposed accents (Unicode NFC) before cleanup
    #[arg(long, global = true)]
    nfc: bool,

    /// Keep the original capitalization of each name
    #[arg(long, global = true)]
    keep_case: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize an author list into links (default command)
    Link {
        /// Input file path (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Emit the clean names and counters as JSON
    Json {
        /// Input file path (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Show how many candidates were found, kept and discarded
    Stats {
        /// Input file path (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

/// Link style
#[derive(Clone, Copy, ValueEnum)]
enum StyleMode {
    /// [Name] links (Scrapbox)
    Bracket,
    /// [[Name]] links (Obsidian, Roam)
    Wiki,
    /// Bare names
    Plain,
}

impl From<StyleMode> for LinkStyle {
    fn from(mode: StyleMode) -> Self {
        match mode {
            StyleMode::Bracket => LinkStyle::Bracket,
            StyleMode::Wiki => LinkStyle::WikiLink,
            StyleMode::Plain => LinkStyle::Plain,
        }
    }
}

impl FormatArgs {
    fn to_options(&self) -> LinkOptions {
        let mut options = LinkOptions::default()
            .with_style(self.style.into())
            .with_delimiter(self.delimiter.clone());

        if self.nfc {
            options = options.with_unicode_normalization();
        }
        if self.keep_case {
            options = options.keep_case();
        }

        options
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let linker = AuthorLinker::with_options(cli.format.to_options());

    let Some(command) = cli.command else {
        // Default command: authorlink [TEXT]...
        let text = if cli.text.is_empty() {
            if io::stdin().is_terminal() {
                use clap::CommandFactory;
                Cli::command().print_help()?;
                return Ok(());
            }
            read_input(None)?
        } else {
            cli.text.join("\n")
        };

        let links = linker.link(&text);
        write_output(None, &links)?;
        return Ok(());
    };

    match command {
        Commands::Link { input, output } => {
            run_link(&linker, input.as_ref(), output.as_ref())?;
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            run_json(&linker, input.as_ref(), output.as_ref(), compact)?;
        }

        Commands::Stats { input } => {
            let text = read_input(input.as_ref())?;
            print!("{}", format_stats(&linker.extract(&text)));
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn run_link(
    linker: &AuthorLinker,
    input: Option<&PathBuf>,
    output: Option<&PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let links = linker.link(&text);
    write_output(output, &links)?;

    if let Some(path) = output {
        println!("{} Wrote links: {}", "✓".green().bold(), path.display());
    }
    Ok(())
}

fn run_json(
    linker: &AuthorLinker,
    input: Option<&PathBuf>,
    output: Option<&PathBuf>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let json = to_json(&linker.extract(&text), compact)?;
    write_output(output, &json)?;

    if let Some(path) = output {
        println!("{} Wrote JSON: {}", "✓".green().bold(), path.display());
    }
    Ok(())
}

fn to_json(list: &AuthorList, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(list)
    } else {
        serde_json::to_string_pretty(list)
    }
}

fn format_stats(list: &AuthorList) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Author List Statistics".cyan().bold()));
    out.push_str(&format!("{}\n", "─".repeat(40)));
    out.push_str(&format!("{}: {}\n", "Candidates".bold(), list.stats.candidates));
    out.push_str(&format!("{}: {}\n", "Kept".bold(), list.stats.kept()));
    out.push_str(&format!("{}: {}\n", "Discarded".bold(), list.stats.discarded));

    if !list.is_empty() {
        out.push_str(&format!("\n{}\n", "Authors".cyan().bold()));
        out.push_str(&format!("{}\n", "─".repeat(40)));
        for (i, name) in list.iter().enumerate() {
            out.push_str(&format!("{:>3}. {}\n", i + 1, name));
        }
    }
    out
}

fn print_version() {
    println!("{} {}", "authorlink".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Author list normalization to citation links");
    println!();
    println!("Link styles: [Name], [[Name]], plain");
}

/// Reads the whole input file, or stdin when no path is given.
fn read_input(path: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    let text = match path {
        Some(p) => String::from_utf8(fs::read(p)?)?,
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };
    debug!(bytes = text.len(), from_file = path.is_some(), "read author list");
    Ok(text)
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
