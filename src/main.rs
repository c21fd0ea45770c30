use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use graph::render::text::{pad_to_width, truncate_to_width};
use graph::{
    calculate_visible_range, optimize_graph_data, parse_commit_graph, EdgePath, GitWalker,
    GraphConfig, GraphData, GraphEdge, GraphNode,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gitgraph")]
#[command(about = "Lay out a commit history as a branch graph", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct HistoryArgs {
    /// Path to the repository
    #[arg(default_value = ".")]
    path: PathBuf,
    /// Number of commits to load
    #[arg(short, long, default_value = "200")]
    limit: usize,
    /// Number of newest commits to skip
    #[arg(long, default_value = "0")]
    offset: usize,
    /// Layout configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the laid-out graph
    Layout {
        #[command(flatten)]
        history: HistoryArgs,
        /// Emit nodes, edges and edge paths as JSON
        #[arg(long)]
        json: bool,
        /// Width of the message column
        #[arg(long, default_value = "60")]
        width: usize,
    },
    /// Print the part of the graph drawn for a viewport
    Window {
        #[command(flatten)]
        history: HistoryArgs,
        /// Scroll offset in pixels
        #[arg(long, default_value = "0")]
        scroll_top: f64,
        /// Viewport height in pixels
        #[arg(long, default_value = "800")]
        viewport_height: f64,
        /// Zoom level (1.0 = 100%)
        #[arg(long, default_value = "1.0")]
        zoom: f64,
    },
    /// Show graph statistics
    Stats {
        #[command(flatten)]
        history: HistoryArgs,
    },
}

#[derive(Serialize)]
struct LayoutDocument<'a> {
    nodes: &'a [GraphNode],
    edges: &'a [GraphEdge],
    lanes: usize,
    paths: &'a [EdgePath],
}

fn load_config(history: &HistoryArgs) -> Result<GraphConfig> {
    match &history.config {
        Some(path) => GraphConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(GraphConfig::default()),
    }
}

fn load_graph(history: &HistoryArgs, config: &GraphConfig) -> Result<GraphData> {
    let path = history.path.to_str().context("Repository path is not valid UTF-8")?;
    let walker = GitWalker::new(Some(path))?;
    let commits = walker.list_commits(history.limit, history.offset)?;
    let data = config.builder().build(parse_commit_graph(&commits));
    tracing::debug!(commits = data.node_count(), lanes = data.lanes, "loaded graph");
    Ok(data)
}

fn print_rows(data: &GraphData, width: usize) {
    let gutter_width = data.lanes.max(1) * 2;
    for node in &data.nodes {
        let mut gutter = " ".repeat(node.lane * 2);
        gutter.push(if node.is_merge() { '◆' } else { '●' });
        println!(
            "{:>5}  {}  {}  {}",
            node.y,
            pad_to_width(&gutter, gutter_width),
            node.commit.short_sha,
            truncate_to_width(&node.commit.message, width)
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Layout { history, json, width } => {
            let config = load_config(&history)?;
            let data = load_graph(&history, &config)?;

            if json {
                let paths = config.router().route(&data.nodes, &data.edges);
                let document = LayoutDocument {
                    nodes: &data.nodes,
                    edges: &data.edges,
                    lanes: data.lanes,
                    paths: &paths,
                };
                println!("{}", serde_json::to_string_pretty(&document)?);
            } else {
                print_rows(&data, width);
            }
        }
        Commands::Window {
            history,
            scroll_top,
            viewport_height,
            zoom,
        } => {
            let config = load_config(&history)?;
            let data = load_graph(&history, &config)?;

            let range = calculate_visible_range(
                scroll_top,
                viewport_height,
                config.row_height,
                data.node_count(),
                config.visible_buffer,
            );
            let view = optimize_graph_data(&data, range, zoom, config.zoom_threshold);
            let paths = config.router().route(&view.nodes, &view.edges);

            println!(
                "Rows {}..={} of {} (zoom {})",
                range.start,
                range.end,
                data.node_count(),
                zoom
            );
            println!(
                "Drawing {} nodes, {} edges ({} curved) across {} lanes",
                view.nodes.len(),
                paths.len(),
                paths.iter().filter(|p| p.is_merge).count(),
                view.lanes
            );
        }
        Commands::Stats { history } => {
            let config = load_config(&history)?;
            let data = load_graph(&history, &config)?;
            let stats = data.stats();

            println!("Graph statistics:");
            println!("  Total commits: {}", stats.total_commits);
            println!("  Edges: {}", stats.total_edges);
            println!("  Merge commits: {}", stats.merge_commits);
            println!("  Root commits: {}", stats.root_commits);
            println!("  Leaf commits: {}", stats.leaf_commits);
            println!("  Lanes: {}", stats.lanes);
        }
    }

    Ok(())
}
