//! Parent selection for the coloring search.
//!
//! Tournament selection picks the fittest of a small random sample of the
//! population. The tournament size tunes selection pressure: larger
//! tournaments make low-conflict candidates win more often.

use crate::models::Coloring;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum SelectionError {
    #[error("tournament size must be at least 1")]
    ZeroTournamentSize,
}

/// Configuration for parent selection.
///
/// A selection round draws `tournament_size` candidates from the population
/// without replacement and returns the one with the fewest conflicts. The
/// driver runs two independent rounds per child pair, so both parents may be
/// the same underlying candidate — accepted behavior, crossover then
/// degenerates to cloning plus mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Selector {
    tournament_size: usize,
}

impl Selector {
    /// Creates a tournament selector. Sizes of 2-3 keep exploration high;
    /// larger sizes converge faster at the cost of diversity.
    pub fn tournament(tournament_size: usize) -> Result<Self, SelectionError> {
        if tournament_size == 0 {
            return Err(SelectionError::ZeroTournamentSize);
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs one tournament over the scored population and returns the winner.
    ///
    /// Candidates are drawn without replacement by shuffling indices; ties
    /// are broken in favor of the first candidate encountered in shuffled
    /// order. The engine guarantees `tournament_size <= scored.len()` at
    /// configuration time, so a shortfall here is a programming error.
    #[instrument(level = "debug", skip(self, rng, scored), fields(tournament_size = self.tournament_size, num_candidates = scored.len()))]
    pub(crate) fn select<'a, R: rand::Rng>(
        &self,
        rng: &mut R,
        scored: &'a [(Coloring, usize)],
    ) -> &'a Coloring {
        assert!(
            self.tournament_size <= scored.len(),
            "tournament size exceeds population size"
        );

        let mut indices: Vec<usize> = (0..scored.len()).collect();
        indices.shuffle(rng);

        let mut winner = indices[0];
        for &idx in &indices[1..self.tournament_size] {
            if scored[idx].1 < scored[winner].1 {
                winner = idx;
            }
        }

        &scored[winner].0
    }
}
