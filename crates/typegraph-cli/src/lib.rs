//! typegraph command-line interface.
//!
//! Loads a fact set, ingests it, filters the graph and writes the rendered
//! document. The output file is written once, after rendering succeeded.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use typegraph::{writer_for, FilterConfig, GraphFilter, GraphFormat, RenderOptions};
use typegraph_facts::{load_facts, IngestOptions, ReferenceKinds};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "typegraph",
    about = "Render project and type dependencies as a yEd GraphML or Graphviz DOT graph",
    version
)]
pub struct Cli {
    /// Fact-set JSON produced by an extraction pass
    #[arg(value_name = "FACTS")]
    pub facts: PathBuf,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Exclude types matching a glob pattern (`*` matches anything; repeatable)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN", action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Only include these projects and the projects they reference (repeatable)
    #[arg(short = 'f', long = "filter", value_name = "PROJECT", action = clap::ArgAction::Append)]
    pub filter: Vec<String>,

    /// Include test projects
    #[arg(long = "include-tests", default_value_t = false)]
    pub include_tests: bool,

    /// Keep types that take part in no type reference
    #[arg(long = "orphaned", default_value_t = false)]
    pub orphaned: bool,

    /// Time budget in milliseconds for compiling and matching exclude patterns
    #[arg(long = "pattern-budget", value_name = "MS", default_value_t = 1000)]
    pub pattern_budget: u64,

    /// Reference kinds to show: all, references, inheritance (repeatable)
    #[arg(short = 'd', long = "display", value_name = "KIND", action = clap::ArgAction::Append)]
    pub display: Vec<String>,

    /// Output format: graphml or dot
    #[arg(long = "format", value_name = "FORMAT", default_value = "graphml")]
    pub format: String,

    /// Prefix stripped from display names (defaults to "<solution>.")
    #[arg(long = "common-prefix", value_name = "PREFIX")]
    pub common_prefix: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Filter configuration selected by the flags.
    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig::default()
            .with_projects(self.filter.iter())
            .with_exclude(self.exclude.iter())
            .with_orphans(self.orphaned)
            .with_pattern_budget(Duration::from_millis(self.pattern_budget))
    }

    /// Ingestion options selected by the flags.
    pub fn ingest_options(&self) -> Result<IngestOptions> {
        let kinds = ReferenceKinds::from_tokens(&self.display).context("Invalid --display value")?;
        Ok(IngestOptions::default()
            .with_tests(self.include_tests)
            .with_kinds(kinds))
    }
}

/// Run the pipeline up to the rendered document, without writing it.
pub fn render(cli: &Cli) -> Result<String> {
    // Configuration first, so bad flags fail before any input is read
    let ingest_options = cli.ingest_options()?;
    let format: GraphFormat = cli.format.parse().context("Invalid --format value")?;
    let filter = GraphFilter::new(&cli.filter_config()).context("Invalid --exclude pattern")?;

    let facts = load_facts(&cli.facts)
        .with_context(|| format!("Failed to load facts from {}", cli.facts.display()))?;
    let graph = facts.ingest(&ingest_options);

    let filtered = filter.apply(&graph).context("Failed to filter graph")?;

    let options = RenderOptions::default().with_common_prefix(
        cli.common_prefix
            .clone()
            .unwrap_or_else(|| facts.common_prefix(&cli.facts)),
    );
    writer_for(format)
        .render(&filtered, &options)
        .with_context(|| format!("Failed to render {format} document"))
}

/// Run the whole pipeline and write the output file.
pub fn run(cli: &Cli) -> Result<()> {
    let document = render(cli)?;
    fs::write(&cli.output, document)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    info!("Done");
    Ok(())
}

/// Install the logger: `info` by default, `debug` with `verbose`, `RUST_LOG` wins.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}
