use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use glossa::models::WordEntry;
use glossa::words::WordTable;
use glossa::{locale, render, store};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "glossa")]
#[command(about = "Extract Wiktionary dumps and render dictionary templates")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a Wiktionary dump into a word -> wikitext table
    Parse(ParseArgs),
    /// Render the templates in a saved word table into readable text
    Render(RenderArgs),
}

#[derive(Args)]
struct ParseArgs {
    /// Locale of the dump (see `locale` for supported codes)
    #[arg(short, long)]
    locale: String,

    /// Path to the dump (.xml or .xml.bz2); defaults to the newest
    /// pages-*.xml[.bz2] under the locale's data directory
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Base data directory; artifacts land in <data-dir>/<locale>
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Snapshot tag for the output artifact; derived from the dump file
    /// name when omitted
    #[arg(long)]
    snapshot: Option<String>,

    /// Re-parse even when the output artifact already exists
    #[arg(long)]
    force: bool,
}

#[derive(Args)]
struct RenderArgs {
    /// Locale whose rule set drives rendering
    #[arg(short, long)]
    locale: String,

    /// Path to a saved word table; resolved from the data directory and
    /// snapshot when omitted
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Base data directory; artifacts land in <data-dir>/<locale>
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Snapshot tag of the word table to render
    #[arg(long)]
    snapshot: Option<String>,
}

fn run_parse(args: ParseArgs) -> Result<()> {
    if locale::get(&args.locale).is_none() {
        bail!(
            "No rule set for locale '{}' (supported: {})",
            args.locale,
            locale::supported().join(", ")
        );
    }

    let dir = args.data_dir.join(&args.locale);

    let input = match args.input {
        Some(path) => path,
        None => latest_dump_in(&dir)?,
    };
    let snapshot = match args.snapshot {
        Some(tag) => tag,
        None => store::snapshot_date(&input).with_context(|| {
            format!(
                "Cannot derive a snapshot tag from '{}'; pass --snapshot",
                input.display()
            )
        })?,
    };

    let out_path = store::words_path(&dir, &snapshot);
    if out_path.exists() && !args.force {
        info!(path = ?out_path, "Word table already exists, skipping (--force to re-parse)");
        return Ok(());
    }

    let start = Instant::now();
    let (table, stats) = WordTable::build(&input)?;
    store::save_words(&table, &dir, &snapshot)?;
    let duration = start.elapsed();

    println!();
    println!("=== Summary ===");
    println!("Parse time:         {:.2}s", duration.as_secs_f64());
    println!();
    println!("Pages seen:         {}", stats.pages());
    println!("Words emitted:      {}", stats.words());
    println!("Unique words:       {}", table.len());
    println!("Redirects skipped:  {}", stats.redirects());
    println!("Namespaces skipped: {}", stats.namespaced());
    println!("Unfinished skipped: {}", stats.unfinished());

    Ok(())
}

fn run_render(args: RenderArgs) -> Result<()> {
    let rules = locale::get(&args.locale).with_context(|| {
        format!(
            "No rule set for locale '{}' (supported: {})",
            args.locale,
            locale::supported().join(", ")
        )
    })?;

    let dir = args.data_dir.join(&args.locale);

    let (words_path, snapshot) = match (args.words, args.snapshot) {
        (Some(path), Some(tag)) => (path, tag),
        (Some(path), None) => {
            let tag = store::table_snapshot(&path).with_context(|| {
                format!(
                    "Cannot derive a snapshot tag from '{}'; pass --snapshot",
                    path.display()
                )
            })?;
            (path, tag)
        }
        (None, Some(tag)) => (store::words_path(&dir, &tag), tag),
        (None, None) => bail!("Pass --snapshot or --words to pick a word table"),
    };

    let table = store::load_words(&words_path)?;
    info!(words = table.len(), "Rendering templates");

    let start = Instant::now();
    let pb = ProgressBar::new(table.len() as u64);
    let mut rendered = WordTable::new();
    for (word, markup) in table.iter() {
        rendered.insert(WordEntry::new(word, render::render_markup(markup, rules)));
        pb.inc(1);
    }
    pb.finish_and_clear();

    store::save_rendered(&rendered, &dir, &snapshot)?;
    let duration = start.elapsed();

    println!();
    println!("=== Summary ===");
    println!("Render time:  {:.2}s", duration.as_secs_f64());
    println!("Entries:      {}", rendered.len());

    Ok(())
}

fn latest_dump_in(dir: &std::path::Path) -> Result<PathBuf> {
    store::latest_dump(dir)?.with_context(|| {
        format!(
            "No dump found in {} (expected pages-<date>.xml[.bz2]); pass --input",
            dir.display()
        )
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let result = match cli.command {
        Commands::Parse(args) => run_parse(args),
        Commands::Render(args) => run_render(args),
    };

    match result {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
