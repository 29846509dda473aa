use tracing::instrument;

/// Vertex ids are the contiguous integers `1..=N`.
pub type VertexId = u32;

/// An undirected edge with its weight. Weights are carried as metadata and
/// play no role in the coloring objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: i64,
}

impl Edge {
    pub fn new(u: VertexId, v: VertexId, weight: i64) -> Self {
        Self { u, v, weight }
    }
}

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum GraphError {
    #[error("edge ({u}, {v}) references an undeclared vertex, vertex_count={vertex_count}")]
    EndpointOutOfRange {
        u: VertexId,
        v: VertexId,
        vertex_count: usize,
    },
    #[error("edge ({0}, {0}) is a self-loop")]
    SelfLoop(VertexId),
}

/// An undirected weighted graph over vertices `1..=N`. Immutable once built;
/// a re-load replaces the whole graph rather than merging into it.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// A graph with no vertices and no edges.
    pub fn empty() -> Self {
        Self {
            vertex_count: 0,
            edges: Vec::new(),
        }
    }

    /// Builds a graph, checking that every edge endpoint is a declared vertex
    /// and that no edge is a self-loop. Duplicate edges are accepted.
    #[instrument(level = "debug", skip(edges), fields(vertex_count = vertex_count, edge_count = edges.len()))]
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self, GraphError> {
        for edge in &edges {
            if edge.u == edge.v {
                return Err(GraphError::SelfLoop(edge.u));
            }
            let in_range = |id: VertexId| id >= 1 && (id as usize) <= vertex_count;
            if !in_range(edge.u) || !in_range(edge.v) {
                return Err(GraphError::EndpointOutOfRange {
                    u: edge.u,
                    v: edge.v,
                    vertex_count,
                });
            }
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Vertices in ascending id order. This is the enumeration order shared
    /// by crossover and rendering; it must stay stable within a run.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        1..=self.vertex_count as VertexId
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbors of `v`, in edge-declaration order.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.iter().filter_map(move |e| {
            if e.u == v {
                Some(e.v)
            } else if e.v == v {
                Some(e.u)
            } else {
                None
            }
        })
    }
}
