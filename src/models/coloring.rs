use crate::models::{ColorId, Graph, Palette, VertexId};
use rand::Rng;

/// One complete vertex-to-color assignment: position `v - 1` holds the
/// palette color of vertex `v`. Total by construction — every vertex of the
/// graph the coloring was built for has exactly one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<ColorId>,
}

impl Coloring {
    pub(crate) fn from_colors(colors: Vec<ColorId>) -> Self {
        Self { colors }
    }

    /// A pure-noise candidate: an independent uniform palette draw for every
    /// vertex, with no awareness of adjacency. The empty graph yields an
    /// empty assignment.
    pub fn random<R: Rng>(rng: &mut R, graph: &Graph, palette: &Palette) -> Self {
        let colors = graph
            .vertices()
            .map(|_| palette.random_color(rng))
            .collect();

        Self { colors }
    }

    /// The color of vertex `v`. Panics if `v` is outside the assignment's
    /// domain; totality is an invariant, so a miss is a programming error.
    pub fn color_of(&self, v: VertexId) -> ColorId {
        self.colors[(v - 1) as usize]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[ColorId] {
        &self.colors
    }

    pub(crate) fn colors_mut(&mut self) -> &mut [ColorId] {
        &mut self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn random_coloring_covers_every_vertex() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = Graph::new(5, vec![Edge::new(1, 2, 1)]).unwrap();
        let palette = Palette::classic();

        let coloring = Coloring::random(&mut rng, &graph, &palette);

        assert_eq!(coloring.len(), 5);
        assert!(coloring.colors().iter().all(|&c| c < palette.len()));
    }

    #[test]
    fn random_coloring_of_the_empty_graph_is_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = Graph::empty();

        let coloring = Coloring::random(&mut rng, &graph, &Palette::classic());
        assert!(coloring.is_empty());
    }

    #[test]
    #[should_panic]
    fn color_of_panics_outside_the_domain() {
        let coloring = Coloring::from_colors(vec![0, 1]);
        coloring.color_of(3);
    }
}
