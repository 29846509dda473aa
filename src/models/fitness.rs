use crate::models::{Coloring, Graph};

/// Counts the edges whose endpoints share a color. Lower is better; zero is
/// a proper coloring. Pure, O(|E|).
///
/// The coloring must cover the graph's full vertex set; a partial assignment
/// is a programming error and fails fast.
pub fn conflicts(graph: &Graph, coloring: &Coloring) -> usize {
    assert_eq!(
        coloring.len(),
        graph.vertex_count(),
        "coloring must assign a color to every vertex"
    );

    graph
        .edges()
        .iter()
        .filter(|edge| coloring.color_of(edge.u) == coloring.color_of(edge.v))
        .count()
}
