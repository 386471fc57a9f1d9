#[macro_use]
extern crate log;

use simplelog::*;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use suffix_tree::SuffixTree;

// CLI tools
use anyhow::{Context, Result};
use console::style;
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};
use structopt::StructOpt;

// Indexed when neither a text nor a file is given
static DEMO_TEXT: &str = "bananasbanananananananananassssss";
static DEMO_QUERY: &str = "ananasbanana";

/// Builds a suffix tree over a text and checks which queries occur in it
#[derive(StructOpt)]
struct CliInput {
    /// Substrings to look for
    queries: Vec<String>,

    /// Text to index
    #[structopt(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// File to index, the tree is grown once per line and line breaks are dropped
    #[structopt(short, long, parse(from_os_str))]
    file: Option<PathBuf>,

    /// Print the tree after building it. Unprintable bytes are escaped
    #[structopt(short, long)]
    render: bool,

    /// Log more, repeat for even more (-v debug, -vv trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    /// Also write the log to this file
    #[structopt(long, parse(from_os_str))]
    log_file: Option<PathBuf>,
}

impl CliInput {
    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn is_demo(&self) -> bool {
        self.text.is_none() && self.file.is_none()
    }
}

// Example input: stree -f ../test_data/dna.txt ACGTTA GATTACA
fn main() -> Result<()> {
    let args = CliInput::from_args();
    init_logging(&args)?;

    let stopwatch = Instant::now();
    let tree = match (&args.text, &args.file) {
        (Some(text), _) => SuffixTree::build(text.bytes()),
        (None, Some(path)) => grow_from_file(path)?,
        (None, None) => {
            info!("No input given, indexing `{}`", DEMO_TEXT);
            SuffixTree::build(DEMO_TEXT.bytes())
        }
    };
    print_build_data(&tree, stopwatch.elapsed());

    let queries = if args.queries.is_empty() && args.is_demo() {
        vec![String::from(DEMO_QUERY)]
    } else {
        args.queries.clone()
    };

    for query in &queries {
        print_query(query, tree.contains(query.as_bytes()));
    }

    if args.render || args.is_demo() {
        print!("{}", tree.render());
    }

    Ok(())
}

fn grow_from_file(path: &Path) -> Result<SuffixTree> {
    trace!("Loading file into memory");

    let file =
        File::open(path).with_context(|| format!("Could not read file `{}`", path.display()))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Could not read lines of `{}`", path.display()))?;

    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} lines {msg}"));

    let mut tree = SuffixTree::new();
    for line in &lines {
        tree.grow(line.bytes());
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(tree)
}

fn print_build_data(tree: &SuffixTree, time: Duration) {
    info!(
        "Indexed {} into {} nodes, taking {:?}",
        HumanBytes(tree.len() as u64),
        tree.node_count(),
        time
    );
    trace!("Implicit suffixes: {}", tree.remainder());
}

fn print_query(query: &str, found: bool) {
    let answer = if found {
        style("found").green()
    } else {
        style("missing").red()
    };
    info!("`{}`: {}", query, answer);
}

fn init_logging(args: &CliInput) -> Result<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        args.level(),
        Config::default(),
        TerminalMode::Mixed,
    )];

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("Could not create log file `{}`", path.display()))?;
        loggers.push(WriteLogger::new(args.level(), Config::default(), file));
    }

    CombinedLogger::init(loggers).context("Could not initialize loggers")?;

    debug!("Loggers initialized.");
    Ok(())
}
