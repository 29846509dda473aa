use crate::models::Coloring;
use rand::Rng;
use tracing::instrument;

/// Single-point crossover over the ascending-vertex-id enumeration order.
///
/// Draws one cut point `c` uniformly from `[1, N-1]` and builds a child from
/// the first `c` colors of `lhs` and the remaining `N - c` colors of `rhs`.
/// The driver calls this twice per parent pair with the roles swapped, so the
/// two children get independent cut points.
///
/// For `N <= 1` no cut point exists; the child is a clone of `lhs`.
#[instrument(level = "debug", skip(rng, lhs, rhs), fields(genome_length = lhs.len()))]
pub(crate) fn single_point<R: Rng>(rng: &mut R, lhs: &Coloring, rhs: &Coloring) -> Coloring {
    let len = lhs.len();
    if len <= 1 {
        return lhs.clone();
    }

    let point = rng.random_range(1..len);
    let mut colors = Vec::with_capacity(len);
    colors.extend_from_slice(&lhs.colors()[..point]); // First part from lhs
    colors.extend_from_slice(&rhs.colors()[point..]); // Second part from rhs

    Coloring::from_colors(colors)
}
