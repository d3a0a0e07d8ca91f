use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use grammata_parser::AssemblyOptions;
use grammata_protocol::Corpus;
use log::info;

mod books;
mod corpus;
mod writer;

use writer::JsonWriter;

#[derive(Parser)]
#[command(author, version, about = "Compiles an annotated Greek text corpus into verse records")]
struct Cli {
    /// Directory of book files, or a single book file
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Root directory for the per-verse JSON files
    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    /// Also write the whole corpus as a zero-copy archive
    #[arg(short, long, value_name = "FILE")]
    archive: Option<PathBuf>,

    /// Extension of the book files inside the input directory
    #[arg(long, default_value = "txt")]
    extension: String,

    /// Include per-letter values for every word
    #[arg(long)]
    letters: bool,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log only warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let units = corpus::discover(&cli.input, &cli.extension)
        .with_context(|| format!("cannot collect books from {}", cli.input.display()))?;
    info!("Found {} book(s) in {}", units.len(), cli.input.display());

    let options = AssemblyOptions { letter_breakdown: cli.letters };
    let writer = JsonWriter::new(&cli.output, cli.pretty);

    let mut books = Vec::with_capacity(units.len());
    let mut verse_total = 0;
    for unit in &units {
        let book = corpus::load(unit, options)
            .with_context(|| format!("cannot parse {}", unit.path.display()))?;
        let written = writer
            .write_book(&book)
            .with_context(|| format!("cannot write verses of {}", book.name))?;
        let colophons = book.verses.iter().filter(|v| v.has_colophon()).count();
        info!("{}: {} verses ({} with colophon)", book.name, written, colophons);
        verse_total += written;
        books.push(book);
    }

    if let Some(path) = &cli.archive {
        let corpus = Corpus::new(books);
        let size = writer::write_archive(path, &corpus)
            .with_context(|| format!("cannot write archive {}", path.display()))?;
        info!("Archive of {} verses written to {} ({} bytes)", corpus.verse_count(), path.display(), size);
    }

    println!(
        "Compiled {} verses from {} book(s) into {}",
        verse_total,
        units.len(),
        cli.output.display()
    );
    Ok(())
}
