use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use typeahead_tui::{DemoApp, init_tracing, load_options, sample_options};

#[derive(Parser)]
#[command(
    name = "typeahead-demo",
    version,
    about = "Interactive demo for the typeahead text field component",
    long_about = None
)]
struct Cli {
    /// JSON file with the options to search over: [{"value": ..., "label": ...}, ...]
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Hint text shown while the input is empty
    #[arg(short, long, default_value = "Type to filter options")]
    placeholder: String,

    /// Label rendered above the input
    #[arg(short, long, default_value = "Typeahead")]
    label: String,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(short, long, env = "TYPEAHEAD_VERBOSE")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = match &cli.data {
        Some(path) => load_options(path)?,
        None => sample_options(),
    };

    DemoApp::new(options, cli.placeholder, cli.label).run()
}
