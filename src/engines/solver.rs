use crate::config::{AppConfig, SolverMethod};
use crate::engines::{
    dynamic::bottom_up,
    exhaustive::exhaustive_all,
    genetic::{evolutionary, population_limit},
    indexing::path_count,
    partitioned::parallel_exhaustive,
};
use crate::error::Result;
use crate::types::{Solution, TriangleData};

/// Solves `data` with `method`. The root node is not part of the result sum.
pub fn solve(method: SolverMethod, data: &TriangleData, config: &AppConfig) -> Result<Solution> {
    log::debug!("Solving {} level triangle with {}", data.num_levels, method);

    match method {
        SolverMethod::Dp => bottom_up(data.num_levels, &data.triangle),
        SolverMethod::Exhaustive => exhaustive_all(data.num_levels, data.max_sum, &data.triangle),
        SolverMethod::Parallel => {
            // Small triangles have fewer paths than configured workers.
            let paths = path_count(data.num_levels).unwrap_or(u64::MAX);
            let workers = (config.partition.worker_count as u64).min(paths) as usize;
            parallel_exhaustive(data.num_levels, data.max_sum, &data.triangle, workers)
        }
        SolverMethod::Genetic => {
            let mut genetic = config.genetic.clone();
            // Small triangles have fewer paths than the configured population.
            if let Some(limit) = population_limit(data.num_levels) {
                if data.num_levels > 1 && genetic.population_size > limit {
                    log::warn!(
                        "Population size {} does not fit a {} level triangle, using {}",
                        genetic.population_size,
                        data.num_levels,
                        limit
                    );
                    genetic.population_size = limit;
                }
            }
            evolutionary(data.num_levels, data.max_sum, &data.triangle, &genetic)
        }
    }
}
