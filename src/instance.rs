//! Loading of graph instances from the flat text format: first line holds
//! the vertex count, every following line an edge as "u v w". Lines whose
//! integer count is not exactly three are skipped.

use crate::models::{Edge, Graph, GraphError, VertexId};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Instance files are found by this file-name prefix.
pub const INSTANCE_PREFIX: &str = "coloring-inst";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("instance file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line 1: invalid vertex count {token:?}")]
    InvalidVertexCount { token: String },
    #[error("line {line}: invalid integer {token:?}")]
    InvalidInteger { line: usize, token: String },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Lists the instance files directly under `dir`, sorted by name.
pub fn list_instances(dir: &Path) -> io::Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(INSTANCE_PREFIX))
        .collect();
    names.sort();

    Ok(names)
}

/// Parses an instance file into a graph.
///
/// A missing file is reported without touching any state. Any other failure
/// (unreadable file, non-integer token, edge referencing an undeclared
/// vertex) aborts the parse; lines carrying a number of integers other than
/// three — blank lines included — are silently skipped.
#[instrument(level = "debug", fields(path = %path.display()))]
pub fn load_instance(path: &Path) -> Result<Graph, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = text.lines();
    let first = lines.next().unwrap_or("").trim();
    let vertex_count: usize = first
        .parse()
        .map_err(|_| LoadError::InvalidVertexCount {
            token: first.to_string(),
        })?;

    let mut edges = Vec::new();
    for (index, line) in lines.enumerate() {
        let numbers = line
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|_| LoadError::InvalidInteger {
                    line: index + 2,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<i64>, _>>()?;

        // Not an edge line; skipped without complaint
        if numbers.len() != 3 {
            continue;
        }

        let endpoint = |value: i64| {
            VertexId::try_from(value).map_err(|_| LoadError::InvalidInteger {
                line: index + 2,
                token: value.to_string(),
            })
        };
        edges.push(Edge::new(endpoint(numbers[0])?, endpoint(numbers[1])?, numbers[2]));
    }

    let graph = Graph::new(vertex_count, edges)?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edges().len(),
        "instance loaded"
    );

    Ok(graph)
}
