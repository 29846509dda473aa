//! The generational driver: orchestrates selection, recombination, mutation
//! and replacement across a fixed number of generations, tracking the
//! best-ever candidate and terminating early on a perfect score.

use crate::models::{
    Coloring, Graph, MutationRate, Palette, Schedule, Selector, conflicts, single_point,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum EngineError {
    #[error("tournament size {tournament_size} exceeds population size {population_size}")]
    TournamentExceedsPopulation {
        tournament_size: usize,
        population_size: u32,
    },
}

/// The outcome of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The best-ever candidate observed across all generations.
    pub best: Coloring,
    /// Its conflict count; zero means a proper coloring was found.
    pub conflicts: usize,
    /// How many generations were evaluated before termination.
    pub generations: u32,
    /// Best-ever conflict count after each evaluated generation. The
    /// sequence is non-increasing.
    pub history: Vec<usize>,
}

impl Report {
    pub fn is_proper(&self) -> bool {
        self.conflicts == 0
    }
}

/// The coloring engine. Holds the search configuration; the graph is passed
/// into [`Engine::run`] as explicit read-only input, and every run seeds its
/// own RNG stream so a fixed seed reproduces the whole search.
#[derive(Debug, Clone)]
pub struct Engine {
    palette: Palette,
    schedule: Schedule,
    selector: Selector,
    mutation_rate: MutationRate,
    seed: Option<u64>,
}

impl Engine {
    pub fn new(
        palette: Palette,
        schedule: Schedule,
        selector: Selector,
        mutation_rate: MutationRate,
    ) -> Result<Self, EngineError> {
        if selector.tournament_size() > schedule.population_size() as usize {
            return Err(EngineError::TournamentExceedsPopulation {
                tournament_size: selector.tournament_size(),
                population_size: schedule.population_size(),
            });
        }

        Ok(Self {
            palette,
            schedule,
            selector,
            mutation_rate,
            seed: None,
        })
    }

    /// Fixes the RNG seed so repeated runs produce identical populations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Runs the search to completion and returns the best-ever record.
    ///
    /// Each generation is scored, sorted ascending by conflict count, and
    /// either terminates the run (zero conflicts, or the generation budget
    /// is spent) or breeds a full replacement population: P/2 parent pairs,
    /// two tournament selections per pair, two crossover calls with swapped
    /// parent roles, and an independent mutation pass over each child. The
    /// best-ever record is tracked outside the breeding pool; it is never
    /// injected back.
    #[instrument(level = "info", skip(self, graph), fields(vertices = graph.vertex_count(), edges = graph.edges().len(), max_generations = self.schedule.max_generations()))]
    pub fn run(&self, graph: &Graph) -> Report {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let population_size = self.schedule.population_size() as usize;
        let mut scored = self.spawn_population(&mut rng, graph, population_size);

        let mut best: Option<(Coloring, usize)> = None;
        let mut history = Vec::new();
        let mut generation = 0;

        loop {
            generation += 1;
            scored.sort_by_key(|(_, count)| *count);

            let generation_best = scored[0].1;
            if best.as_ref().is_none_or(|(_, count)| generation_best < *count) {
                tracing::debug!(generation, conflicts = generation_best, "new best candidate");
                best = Some((scored[0].0.clone(), generation_best));
            }
            let (_, best_count) = best.as_ref().expect("population is never empty");
            history.push(*best_count);

            if *best_count == 0 || generation >= self.schedule.max_generations() {
                break;
            }

            scored = self.breed(&mut rng, graph, &scored, population_size);
        }

        let (best, conflicts) = best.expect("population is never empty");
        tracing::info!(conflicts, generations = generation, "search finished");

        Report {
            best,
            conflicts,
            generations: generation,
            history,
        }
    }

    fn spawn_population<R: Rng>(
        &self,
        rng: &mut R,
        graph: &Graph,
        population_size: usize,
    ) -> Vec<(Coloring, usize)> {
        (0..population_size)
            .map(|_| {
                let candidate = Coloring::random(rng, graph, &self.palette);
                let count = conflicts(graph, &candidate);
                (candidate, count)
            })
            .collect()
    }

    fn breed<R: Rng>(
        &self,
        rng: &mut R,
        graph: &Graph,
        scored: &[(Coloring, usize)],
        population_size: usize,
    ) -> Vec<(Coloring, usize)> {
        let mut next = Vec::with_capacity(population_size);

        for _ in 0..population_size / 2 {
            let parent_a = self.selector.select(rng, scored);
            let parent_b = self.selector.select(rng, scored);

            let mut child_a = single_point(rng, parent_a, parent_b);
            let mut child_b = single_point(rng, parent_b, parent_a);

            self.mutation_rate.mutate(rng, &mut child_a, &self.palette);
            self.mutation_rate.mutate(rng, &mut child_b, &self.palette);

            let count_a = conflicts(graph, &child_a);
            let count_b = conflicts(graph, &child_b);
            next.push((child_a, count_a));
            next.push((child_b, count_b));
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;

    fn engine(max_generations: u32, population_size: u32) -> Engine {
        Engine::new(
            Palette::classic(),
            Schedule::generational(max_generations, population_size).unwrap(),
            Selector::tournament(3).unwrap(),
            MutationRate::new(0.05).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn it_rejects_a_tournament_larger_than_the_population() {
        let result = Engine::new(
            Palette::classic(),
            Schedule::generational(10, 4).unwrap(),
            Selector::tournament(5).unwrap(),
            MutationRate::new(0.1).unwrap(),
        );

        assert_eq!(
            result.unwrap_err(),
            EngineError::TournamentExceedsPopulation {
                tournament_size: 5,
                population_size: 4,
            }
        );
    }

    #[test]
    fn the_report_covers_the_full_vertex_set() {
        let graph = Graph::new(6, vec![Edge::new(1, 4, 1), Edge::new(2, 5, 1)]).unwrap();
        let report = engine(10, 8).with_seed(3).run(&graph);

        assert_eq!(report.best.len(), 6);
    }

    #[test]
    fn an_edgeless_graph_terminates_after_one_generation() {
        let graph = Graph::new(2, vec![]).unwrap();
        let report = engine(50, 10).with_seed(5).run(&graph);

        assert_eq!(report.generations, 1);
        assert_eq!(report.conflicts, 0);
        assert!(report.is_proper());
    }

    #[test]
    fn the_empty_graph_terminates_after_one_generation() {
        let report = engine(50, 10).with_seed(5).run(&Graph::empty());

        assert_eq!(report.generations, 1);
        assert_eq!(report.conflicts, 0);
        assert!(report.best.is_empty());
    }

    #[test]
    fn it_terminates_within_the_generation_budget() {
        // Palette of one color on a triangle: 3 conflicts are unavoidable,
        // so the run must exhaust its budget and still report a best
        let graph = Graph::new(
            3,
            vec![Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(1, 3, 1)],
        )
        .unwrap();
        let engine = Engine::new(
            Palette::new(vec!["red".into()]).unwrap(),
            Schedule::generational(7, 6).unwrap(),
            Selector::tournament(3).unwrap(),
            MutationRate::new(0.2).unwrap(),
        )
        .unwrap()
        .with_seed(11);

        let report = engine.run(&graph);

        assert_eq!(report.generations, 7);
        assert_eq!(report.conflicts, 3);
        assert_eq!(report.history.len(), 7);
    }

    #[test]
    fn the_best_ever_record_is_monotone() {
        let graph = Graph::new(
            4,
            vec![
                Edge::new(1, 2, 1),
                Edge::new(2, 3, 1),
                Edge::new(3, 4, 1),
                Edge::new(4, 1, 1),
                Edge::new(1, 3, 1),
            ],
        )
        .unwrap();
        let report = engine(30, 10).with_seed(17).run(&graph);

        for pair in report.history.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn a_fixed_seed_reproduces_the_run() {
        let graph = Graph::new(
            5,
            vec![Edge::new(1, 2, 1), Edge::new(2, 3, 2), Edge::new(4, 5, 3)],
        )
        .unwrap();

        let first = engine(20, 10).with_seed(99).run(&graph);
        let second = engine(20, 10).with_seed(99).run(&graph);

        assert_eq!(first, second);
    }
}
