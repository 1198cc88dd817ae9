//! graph-pptx CLI - extract diagrams drawn on PowerPoint slides
//!
//! A command-line tool for listing the nodes and edges of a slide diagram.

use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use graph_pptx::render::{self, JsonFormat};
use graph_pptx::{ExtractOptions, Graph, GraphExtractor, PresentationContainer};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Extract the directed graph drawn on a PowerPoint slide
#[derive(Parser)]
#[command(
    name = "graph-pptx",
    author = "iyulab",
    version,
    about = "Extract the directed graph drawn on a PowerPoint slide",
    long_about = "graph-pptx - read shapes and connectors from a slide.\n\n\
                  Shapes with a preset geometry become nodes, connectors become edges."
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print nodes and edges as a plain listing
    Dump {
        /// Input file path
        input: PathBuf,

        /// Slide entry to read
        #[arg(long, default_value = graph_pptx::pptx::TARGET_ENTRY)]
        entry: String,
    },

    /// Convert the graph to JSON
    Json {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,

        /// Slide entry to read
        #[arg(long, default_value = graph_pptx::pptx::TARGET_ENTRY)]
        entry: String,
    },

    /// Show container information and graph statistics
    Info {
        /// Input file path
        input: PathBuf,

        /// Slide entry to read
        #[arg(long, default_value = graph_pptx::pptx::TARGET_ENTRY)]
        entry: String,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Dump { input, entry } => {
            let pb = create_spinner("Extracting graph...");
            let graph = extract(&input, &entry)?;
            pb.finish_and_clear();

            write_output(None, render::to_dump(&graph).trim_end())?;
        }

        Commands::Json {
            input,
            output,
            compact,
            entry,
        } => {
            let pb = create_spinner("Extracting graph...");

            let graph = extract(&input, &entry)?;
            pb.set_message("Rendering to JSON...");

            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = render::to_json(&graph, format)?;

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!("{} Converted to JSON: {}", "✓".green().bold(), path.display());
            }
        }

        Commands::Info { input, entry } => {
            let pb = create_spinner("Analyzing presentation...");

            let container = PresentationContainer::open(&input)?;
            let kind = graph_pptx::detect_kind(&container);
            let slides = container.list_files_with_prefix("ppt/slides/slide");
            let has_entry = container.exists(&entry);

            let mut extractor =
                GraphExtractor::with_options(ExtractOptions::new().with_target_entry(&entry))?;
            extractor.parse_container(&container)?;
            let graph = extractor.into_graph();

            pb.finish_and_clear();

            println!("{}", "Presentation Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("{}: {}", "Container".bold(), kind);
            println!("{}: {}", "Entries".bold(), container.list_files().len());
            println!("{}: {}", "Slides".bold(), slides.len());
            println!(
                "{}: {} ({})",
                "Target".bold(),
                entry,
                if has_entry { "present" } else { "missing" }
            );

            println!("\n{}", "Graph Statistics".cyan().bold());
            println!("{}", "─".repeat(40));
            println!("{}: {}", "Nodes".bold(), graph.nodes.len());
            println!("{}: {}", "Edges".bold(), graph.edges.len());

            let dangling = graph.dangling_edges();
            if dangling.is_empty() {
                println!("{}: 0", "Dangling edges".bold());
            } else {
                println!(
                    "{}: {}",
                    "Dangling edges".bold(),
                    dangling.len().to_string().yellow()
                );
                for (id, edge) in dangling {
                    println!("  {} {} {}", "!".yellow().bold(), id, edge);
                }
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn extract(input: &Path, entry: &str) -> graph_pptx::Result<Graph> {
    let options = ExtractOptions::new().with_target_entry(entry);
    let mut extractor = GraphExtractor::with_options(options)?;
    extractor.parse(input)?;
    Ok(extractor.into_graph())
}

fn print_version() {
    println!("{} {}", "graph-pptx".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Extract the directed graph drawn on a PowerPoint slide");
    println!();
    println!("Supported formats: PPTX");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_entry_default() {
        let cli = Cli::try_parse_from(["graph-pptx", "dump", "a.pptx"]).unwrap();
        match cli.command {
            Commands::Dump { entry, .. } => assert_eq!(entry, "ppt/slides/slide1.xml"),
            _ => panic!("expected dump"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["graph-pptx", "info", "a.pptx", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
