//! Line-oriented graph description parser
//!
//! Format:
//! - the first letter-initial line declares the kind: `G`/`g` undirected,
//!   `D`/`d` directed; any other letter is an error, later letter lines
//!   are ignored
//! - a digit-initial line lists comma-separated vertex ids; when several
//!   appear, the last wins
//! - `(from,to)` and `(from,to,weight)` lines declare edges; the first edge
//!   line fixes the arity for the whole file and a mismatch on a later line
//!   is rejected
//!
//! Empty lines and lines starting with any other character are skipped.

use std::fs;
use std::path::Path;

use crate::error::{Result, SkeinError};
use crate::graph::Graph;

/// An edge line awaiting arity validation
struct RawEdge {
    line: usize,
    fields: Vec<String>,
}

/// Scanned shape of a graph description
struct Description {
    directed: bool,
    vertex_list: Option<String>,
    edges: Vec<RawEdge>,
}

/// Parse a graph description from text.
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_graph(input: &str) -> Result<Graph<String>> {
    let description = scan(input)?;
    build(description)
}

/// Read a graph description file.
pub fn read_graph_file(path: &Path) -> Result<Graph<String>> {
    let text = fs::read_to_string(path)?;
    parse_graph(&text)
}

fn scan(input: &str) -> Result<Description> {
    let mut kind: Option<char> = None;
    let mut vertex_list: Option<String> = None;
    let mut edges: Vec<RawEdge> = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim_end();
        let number = index + 1;
        let Some(first) = line.chars().next() else {
            continue;
        };

        if first.is_ascii_alphabetic() {
            if kind.is_none() {
                let declared = first.to_ascii_uppercase();
                if declared != 'G' && declared != 'D' {
                    return Err(SkeinError::invalid_format(
                        number,
                        "expected graph type 'G' or 'D'",
                    ));
                }
                kind = Some(declared);
            }
        } else if first.is_ascii_digit() {
            vertex_list = Some(line.to_string());
        } else if first == '(' {
            edges.push(scan_edge(line, number)?);
        }
    }

    Ok(Description {
        directed: kind == Some('D'),
        vertex_list,
        edges,
    })
}

fn scan_edge(line: &str, number: usize) -> Result<RawEdge> {
    let Some(body) = line.strip_prefix('(').and_then(|s| s.strip_suffix(')')) else {
        return Err(SkeinError::invalid_format(
            number,
            "edge line must end with ')'",
        ));
    };
    let fields: Vec<String> = body.split(',').map(|f| f.trim().to_string()).collect();
    if fields.len() != 2 && fields.len() != 3 {
        return Err(SkeinError::invalid_format(
            number,
            "expected (from,to) or (from,to,weight)",
        ));
    }
    Ok(RawEdge {
        line: number,
        fields,
    })
}

fn build(description: Description) -> Result<Graph<String>> {
    // the first edge line decides whether the whole file carries weights
    let weighted = description
        .edges
        .first()
        .is_some_and(|edge| edge.fields.len() == 3);
    let mut graph = Graph::new(description.directed, weighted);

    if let Some(list) = description.vertex_list {
        for id in list.split(',') {
            graph.add_vertex(id.trim().to_string())?;
        }
    }

    let expected = if weighted { 3 } else { 2 };
    for edge in description.edges {
        if edge.fields.len() != expected {
            return Err(SkeinError::invalid_format(
                edge.line,
                format!(
                    "expected {} fields per edge, found {}",
                    expected,
                    edge.fields.len()
                ),
            ));
        }
        let mut fields = edge.fields.into_iter();
        let from = fields.next().unwrap_or_default();
        let to = fields.next().unwrap_or_default();
        match fields.next() {
            Some(weight) => {
                let weight: f64 = weight.parse().map_err(|_| {
                    SkeinError::invalid_format(edge.line, format!("invalid edge weight: {weight}"))
                })?;
                graph.add_weighted_edge(from, to, weight)?;
            }
            None => graph.add_edge(from, to)?,
        }
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edges().len(),
        directed = graph.is_directed(),
        weighted = graph.is_weighted(),
        "graph description loaded"
    );
    Ok(graph)
}
