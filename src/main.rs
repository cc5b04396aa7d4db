mod output;
mod parser;
mod record;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::{info, trace};

use parser::diagnostics::TracingSink;

const DEFAULT_INPUT: &str = "814-20180314-Language-museums-OG.txt";

#[derive(Parser)]
#[command(
    name = "museum_splitter",
    about = "Split the Language Museums of the World text dump into one JSON file per museum"
)]
struct Cli {
    /// Directory to write <slug>.json files into
    #[arg(default_value = output::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Paginated text produced by pdftotext
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    info!(input = %cli.input.display(), output = %cli.output_dir.display(), "Splitting museum directory");
    let mut sink = TracingSink::new();
    let counts = split_file(&cli.input, &cli.output_dir, &mut sink)?;
    counts.print(&sink);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct SplitCounts {
    pages: usize,
    museums: usize,
    complete: usize,
    incomplete: usize,
}

impl SplitCounts {
    fn print(&self, sink: &TracingSink) {
        println!(
            "Scanned {} pages: wrote {} museums ({} complete, {} incomplete).",
            self.pages, self.museums, self.complete, self.incomplete,
        );
        if sink.total() > 0 {
            println!("{} diagnostics:", sink.total());
            for (kind, n) in sink.counts() {
                println!("  {:<24} {:>5}", kind, n);
            }
        }
    }
}

/// Read `input` page by page and write one record per museum page into
/// `output_dir`. Stops at the first read or write failure.
fn split_file(
    input: &Path,
    output_dir: &Path,
    sink: &mut TracingSink,
) -> anyhow::Result<SplitCounts> {
    let pages = parser::pages::open_pages(input)?;
    let mut counts = SplitCounts::default();

    for (idx, page) in pages.enumerate() {
        let page = page.with_context(|| format!("Failed to read {}", input.display()))?;
        counts.pages += 1;

        let Some(record) = parser::process_page(&page, sink) else {
            trace!(page = idx, "not a museum page");
            continue;
        };

        output::write_record(&record, output_dir)?;
        counts.museums += 1;
        if record.is_complete() {
            counts.complete += 1;
        } else {
            counts.incomplete += 1;
        }
    }

    info!(pages = counts.pages, museums = counts.museums, "Finished");
    Ok(counts)
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
