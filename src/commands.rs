//! Command implementations for the skein CLI

use std::path::Path;

use serde::Serialize;

use skein_core::error::Result;
use skein_core::graph::{Graph, NeighborOrder};
use skein_core::reader;

use crate::cli::{Cli, Command, OutputFormat};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Info { file } => info(cli, file),
        Command::Eulerian {
            file,
            skip_connectivity,
        } => eulerian(cli, file, *skip_connectivity),
        Command::Connected { file } => connected(cli, file),
        Command::Path {
            file,
            from,
            to,
            any,
        } => path(cli, file, from, to, *any),
        Command::Clique { file, seed } => clique(cli, file, seed.as_deref()),
        Command::Rank { file, iterations } => rank(cli, file, *iterations),
    }
}

fn load(file: &Path) -> Result<Graph<String>> {
    tracing::debug!(file = %file.display(), "loading graph description");
    reader::read_graph_file(file)
}

#[derive(Serialize)]
struct InfoReport {
    directed: bool,
    weighted: bool,
    vertices: usize,
    edges: usize,
}

fn info(cli: &Cli, file: &Path) -> Result<()> {
    let graph = load(file)?;
    let report = InfoReport {
        directed: graph.is_directed(),
        weighted: graph.is_weighted(),
        vertices: graph.vertex_count(),
        edges: graph.edges().len(),
    };
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => {
            println!(
                "kind: {}",
                if report.directed {
                    "directed"
                } else {
                    "undirected"
                }
            );
            println!("weighted: {}", report.weighted);
            println!("vertices: {}", report.vertices);
            println!("edges: {}", report.edges);
        }
    }
    Ok(())
}

fn eulerian(cli: &Cli, file: &Path, skip_connectivity: bool) -> Result<()> {
    let graph = load(file)?;
    let eulerian = graph.is_eulerian(!skip_connectivity)?;
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "eulerian": eulerian })),
        OutputFormat::Human => println!("This graph is Eulerian: {}", eulerian),
    }
    Ok(())
}

fn connected(cli: &Cli, file: &Path) -> Result<()> {
    let graph = load(file)?;
    let connected = graph.is_connected();
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "connected": connected })),
        OutputFormat::Human => println!("This graph is connected: {}", connected),
    }
    Ok(())
}

#[derive(Serialize)]
struct PathReport {
    from: String,
    to: String,
    found: bool,
    path: Vec<String>,
    hops: usize,
}

fn path(cli: &Cli, file: &Path, from: &str, to: &str, any: bool) -> Result<()> {
    let graph = load(file)?;
    let from = from.to_string();
    let to = to.to_string();
    let found = if any {
        graph.find_path(&from, &to)?
    } else {
        graph.shortest_path(&from, &to)?
    };

    let report = PathReport {
        hops: found.as_ref().map_or(0, |p| p.len().saturating_sub(1)),
        found: found.is_some(),
        path: found.unwrap_or_default(),
        from,
        to,
    };
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human if report.found => println!("{}", report.path.join(" -> ")),
        OutputFormat::Human => println!("no path from {} to {}", report.from, report.to),
    }
    Ok(())
}

fn clique(cli: &Cli, file: &Path, seed: Option<&str>) -> Result<()> {
    let graph = load(file)?;
    let seed = match seed {
        Some(id) => Some(graph.vertex(&id.to_string())?),
        None => None,
    };
    let clique = graph.maximal_clique(seed, NeighborOrder::Ascending)?;

    let mut members = Vec::with_capacity(clique.len());
    for vertex in clique {
        members.push(graph.id_of(vertex)?.clone());
    }
    members.sort();

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "members": members })),
        OutputFormat::Human => println!("{}", members.join(", ")),
    }
    Ok(())
}

fn rank(cli: &Cli, file: &Path, iterations: usize) -> Result<()> {
    let graph = load(file)?;
    let entries = graph.influence(iterations);
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Human => {
            for entry in &entries {
                println!("{:<12.6} {}", entry.rank, entry.id);
            }
        }
    }
    Ok(())
}
