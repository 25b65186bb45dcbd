use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use graphvis::config::Config;
use graphvis::core::types::{steps_from_edges, HighlightEvent, Step};
use graphvis::graph::Graph;
use graphvis::io::{self, text_codec};
use graphvis::services::algorithm::{Bfs, Dfs, Dijkstra, Kruskal};
use graphvis::services::playback::PlaybackScheduler;
use graphvis::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "GraphVis Contributors")]
struct Cli {
    /// Path to a TOML config file; defaults are used when absent
    #[clap(short, long)]
    config: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a graph file and print its contents
    Show {
        #[clap(short, long)]
        file: String,
        /// Print the graph as JSON instead of text
        #[clap(long)]
        json: bool,
        /// Also print the adjacency matrix
        #[clap(long)]
        matrix: bool,
    },
    /// Run an algorithm and play its steps back as highlight events
    Run {
        #[clap(short, long)]
        file: String,
        #[clap(short, long, value_enum)]
        algorithm: Algorithm,
        /// Start vertex (required for dfs, bfs and dijkstra)
        #[clap(short, long)]
        start: Option<String>,
        /// Per-step delay in milliseconds (config default when absent)
        #[clap(long)]
        speed: Option<u64>,
    },
    /// Write the graph back out as a downloadable artifact
    Export {
        #[clap(short, long)]
        file: String,
        #[clap(short, long)]
        out: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    Dfs,
    Bfs,
    Mst,
    Dijkstra,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    logging::init(&config)?;

    let outcome = dispatch(cli.command, &config).await;
    logging::shutdown();
    outcome
}

async fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Show { file, json, matrix } => {
            let graph = load(&file, config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&graph)?);
            } else {
                print_graph(&graph);
            }
            if matrix {
                print_matrix(&graph);
            }
        }
        Command::Run {
            file,
            algorithm,
            start,
            speed,
        } => {
            let graph = load(&file, config)?;
            let steps = run_algorithm(&graph, algorithm, start.as_deref())?;
            let speed = speed.unwrap_or(config.playback_speed_ms);
            play(&steps, speed).await;
        }
        Command::Export { file, out } => {
            let graph = load(&file, config)?;
            std::fs::write(&out, text_codec::serialize_download(&graph))?;
            println!("wrote {}", out);
        }
    }
    Ok(())
}

fn load(path: &str, config: &Config) -> Result<Graph> {
    let content = std::fs::read_to_string(path)?;
    Ok(io::load_graph(&content, config)?)
}

fn run_algorithm(graph: &Graph, algorithm: Algorithm, start: Option<&str>) -> Result<Vec<Step>> {
    let steps = match algorithm {
        Algorithm::Dfs => Dfs::traverse(graph, required_start(start)?)?,
        Algorithm::Bfs => Bfs::traverse(graph, required_start(start)?)?,
        Algorithm::Mst => steps_from_edges(&Kruskal::spanning_edges(graph)),
        Algorithm::Dijkstra => {
            steps_from_edges(&Dijkstra::shortest_path_tree(graph, required_start(start)?)?)
        }
    };
    Ok(steps)
}

fn required_start(start: Option<&str>) -> Result<&str> {
    start.ok_or_else(|| anyhow::anyhow!("this algorithm needs --start <vertex>"))
}

async fn play(steps: &[Step], speed_ms: u64) {
    let (scheduler, mut events) = PlaybackScheduler::channel();
    scheduler.start(steps, speed_ms);
    if steps.is_empty() {
        println!("nothing to play");
        return;
    }
    while let Some(event) = events.recv().await {
        match event {
            HighlightEvent::Vertex(id) => println!("visit  {}", id),
            HighlightEvent::Edge { source, target } => println!("edge   {} -> {}", source, target),
            HighlightEvent::Reset => {
                println!("reset");
                break;
            }
        }
    }
}

fn print_graph(graph: &Graph) {
    println!("vertices ({}):", graph.vertices().len());
    for vertex in graph.vertices() {
        match graph.sentence_of(&vertex.id) {
            Some(sentence) => println!("  {}: {}", vertex.id, sentence),
            None => println!("  {}", vertex.id),
        }
    }
    println!("edges ({}):", graph.edges().len());
    for edge in graph.edges() {
        let link = if edge.directed { "->" } else { "--" };
        println!("  {} {} {} ({})", edge.source, link, edge.target, edge.weight);
    }
}

fn print_matrix(graph: &Graph) {
    let ids: Vec<&str> = graph.vertices().iter().map(|v| v.id.as_str()).collect();
    print!("{:>8}", "");
    for id in &ids {
        print!("{:>8}", id);
    }
    println!();
    for (i, row) in graph.adjacency_matrix().iter().enumerate() {
        print!("{:>8}", ids[i]);
        for cell in row {
            print!("{:>8}", cell);
        }
        println!();
    }
}
