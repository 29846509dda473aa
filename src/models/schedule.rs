use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum ScheduleError {
    #[error("generation budget must be at least 1")]
    ZeroGenerations,
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(u32),
    #[error("population size must be even, got {0}")]
    PopulationNotEven(u32),
}

/// The generational budget of a run: how many candidates each generation
/// holds and how many generations are bred before the search gives up.
///
/// Breeding consumes parents pairwise and produces two children per pairing,
/// so the population size must be even; odd sizes are rejected here rather
/// than resolved by an arbitrary leftover rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Schedule {
    max_generations: u32,
    population_size: u32,
}

impl Schedule {
    pub fn generational(max_generations: u32, population_size: u32) -> Result<Self, ScheduleError> {
        if max_generations == 0 {
            return Err(ScheduleError::ZeroGenerations);
        }
        if population_size < 2 {
            return Err(ScheduleError::PopulationTooSmall(population_size));
        }
        if population_size % 2 != 0 {
            return Err(ScheduleError::PopulationNotEven(population_size));
        }

        Ok(Self {
            max_generations,
            population_size,
        })
    }

    pub fn max_generations(&self) -> u32 {
        self.max_generations
    }

    pub fn population_size(&self) -> u32 {
        self.population_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_a_valid_schedule() {
        let schedule = Schedule::generational(50, 20).unwrap();

        assert_eq!(schedule.max_generations(), 50);
        assert_eq!(schedule.population_size(), 20);
    }

    #[test]
    fn it_rejects_a_zero_generation_budget() {
        assert_eq!(
            Schedule::generational(0, 20).unwrap_err(),
            ScheduleError::ZeroGenerations
        );
    }

    #[test]
    fn it_rejects_populations_too_small_to_breed() {
        assert_eq!(
            Schedule::generational(10, 0).unwrap_err(),
            ScheduleError::PopulationTooSmall(0)
        );
    }

    #[test]
    fn it_rejects_odd_population_sizes() {
        assert_eq!(
            Schedule::generational(10, 21).unwrap_err(),
            ScheduleError::PopulationNotEven(21)
        );
    }
}
