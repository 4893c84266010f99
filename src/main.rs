//! ebook-detail - render an ebook record as a detail view

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use ebook_detail::{
    DescriptionBlock, DetailPage, DisplayStrings, EbookRecord, Format, HeaderBlock, Result,
};

#[derive(Parser)]
#[command(name = "ebook-detail")]
#[command(version, about = "Render an ebook record as a detail view", long_about = None)]
#[command(after_help = "EXAMPLES:
    ebook-detail book.json                 Print the detail view as text
    ebook-detail book.json -o book.html    Write an XHTML fragment
    ebook-detail --locale fr -f md < book.json
    ebook-detail book.json --only description")]
struct Cli {
    /// Record JSON file (`-` or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Output format: text, markdown, xhtml, json (inferred from OUTPUT when omitted)
    #[arg(short, long)]
    format: Option<String>,

    /// Language for built-in display strings
    #[arg(long, default_value = "en")]
    locale: String,

    /// JSON file overriding display strings (takes precedence over --locale)
    #[arg(long, value_name = "FILE")]
    strings: Option<PathBuf>,

    /// Render a single block instead of the full page
    #[arg(long, value_enum)]
    only: Option<BlockChoice>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum BlockChoice {
    Header,
    Description,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let record = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => EbookRecord::from_path(path)?,
        _ => EbookRecord::from_reader(io::stdin().lock())?,
    };

    let strings = match &cli.strings {
        Some(path) => DisplayStrings::from_path(path)?,
        None => DisplayStrings::for_locale(&cli.locale)?,
    };

    let format = match (&cli.format, &cli.output) {
        (Some(name), _) => name.parse::<Format>()?,
        (None, Some(path)) => Format::for_output(path)?,
        (None, None) => Format::default(),
    };

    let page = match cli.only {
        Some(BlockChoice::Header) => DetailPage::empty().with_block(HeaderBlock),
        Some(BlockChoice::Description) => DetailPage::empty().with_block(DescriptionBlock),
        None => DetailPage::standard(),
    };
    tracing::debug!(?page, %format, locale = %cli.locale, "rendering");

    let tree = page.render(&record, &strings);

    match &cli.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            format.export(&tree, &mut out)?;
            out.flush()?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut out = io::stdout().lock();
            format.export(&tree, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
