use crate::models::{ColorId, Graph, Palette, VertexId};

/// Label used when the greedy pass runs out of palette colors.
pub const OVERFLOW_LABEL: &str = "black";

/// A color produced by the greedy heuristic. The overflow case is a distinct,
/// degenerate path: it is not a palette color and never enters the genetic
/// engine's candidate representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreedyColor {
    Palette(ColorId),
    Overflow,
}

impl GreedyColor {
    pub fn label<'a>(&self, palette: &'a Palette) -> &'a str {
        match self {
            GreedyColor::Palette(color) => palette.label(*color),
            GreedyColor::Overflow => OVERFLOW_LABEL,
        }
    }
}

/// The deterministic sibling of the genetic engine: walks vertices in
/// ascending id order and gives each the first palette color not already
/// used by a neighbor, falling back to the overflow color when all are
/// blocked. Position `v - 1` holds the color of vertex `v`.
pub fn greedy_coloring(graph: &Graph, palette: &Palette) -> Vec<GreedyColor> {
    let mut assigned: Vec<GreedyColor> = Vec::with_capacity(graph.vertex_count());

    for vertex in graph.vertices() {
        let blocked = |color: ColorId| {
            graph.neighbors(vertex).any(|neighbor| {
                neighbor < vertex
                    && assigned[(neighbor - 1) as usize] == GreedyColor::Palette(color)
            })
        };

        let color = palette
            .colors()
            .find(|&color| !blocked(color))
            .map_or(GreedyColor::Overflow, GreedyColor::Palette);
        assigned.push(color);
    }

    assigned
}

/// Conflicts under a greedy assignment: edges whose endpoints carry the same
/// color, overflow included. A correct greedy pass only conflicts through
/// overflow pairs.
pub fn greedy_conflicts(graph: &Graph, assigned: &[GreedyColor]) -> usize {
    graph
        .edges()
        .iter()
        .filter(|edge| assigned[(edge.u - 1) as usize] == assigned[(edge.v - 1) as usize])
        .count()
}
