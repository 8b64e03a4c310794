use crate::config::GeneticConfig;
use crate::engines::exhaustive::exhaustive_all;
use crate::engines::genetic::{
    chromosome::{to_steps, Chromosome},
    engine::{FitnessFunction, GeneticEngine},
    progress::LogProgressCallback,
};
use crate::engines::indexing::{check_shape, level_offsets, path_count, path_sum};
use crate::error::{precondition, Result};
use crate::types::Solution;

/// Path sum over the theoretical maximum, so a feasible `max_sum` scores 1.
pub struct PathFitness<'a> {
    triangle: &'a [u32],
    prev_counts: Vec<usize>,
    max_sum: f64,
}

impl<'a> PathFitness<'a> {
    pub fn new(num_levels: usize, max_sum: u64, triangle: &'a [u32]) -> Result<Self> {
        check_shape(num_levels, triangle)?;
        if max_sum == 0 {
            return precondition("maximum sum must be positive to normalise fitness");
        }

        Ok(Self {
            triangle,
            prev_counts: level_offsets(num_levels).0,
            max_sum: max_sum as f64,
        })
    }

    pub fn path_sum(&self, chromosome: &[bool]) -> u64 {
        path_sum(chromosome.iter().copied(), &self.prev_counts, self.triangle)
    }
}

impl FitnessFunction for PathFitness<'_> {
    fn evaluate(&self, population: &[Chromosome]) -> Vec<f64> {
        population
            .iter()
            .map(|chromosome| self.path_sum(chromosome) as f64 / self.max_sum)
            .collect()
    }
}

/// Largest even population strictly below the number of paths, `None` when
/// the path count does not fit in 64 bits.
pub fn population_limit(num_levels: usize) -> Option<usize> {
    path_count(num_levels)
        .map(|paths| usize::try_from(paths.saturating_sub(2)).unwrap_or(usize::MAX - 1))
}

/// Genetic search for the best path.
///
/// The population must be smaller than the number of paths. A single-level
/// triangle has no valid population at all (two paths, even size below two),
/// so its two paths are compared directly.
pub fn evolutionary(
    num_levels: usize,
    max_sum: u64,
    triangle: &[u32],
    config: &GeneticConfig,
) -> Result<Solution> {
    let fitness = PathFitness::new(num_levels, max_sum, triangle)?;

    if num_levels == 1 {
        log::debug!("Single level triangle, comparing both paths directly");
        return exhaustive_all(num_levels, max_sum, triangle);
    }

    if let Some(paths) = path_count(num_levels) {
        if config.population_size as u64 >= paths {
            return precondition(format!(
                "population size {} must be below the {} paths of a {} level triangle",
                config.population_size, paths, num_levels
            ));
        }
    }

    let mut engine = GeneticEngine::new(config.clone())?;
    let outcome = engine.run(&fitness, num_levels, LogProgressCallback::default())?;

    log::info!(
        "Genetic search finished after {} generations with fitness {:.4}",
        outcome.generations,
        outcome.score
    );

    Ok(Solution::new(fitness.path_sum(&outcome.chromosome), to_steps(&outcome.chromosome)))
}
