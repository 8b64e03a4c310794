use super::traits::ConfigSection;
use crate::error::TrianglePathError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Chromosomes per generation. Must be even, since crossover pairs rows.
    pub population_size: usize,
    pub max_generations: usize,
    /// Probability that a pair of chromosomes exchanges bit suffixes.
    pub crossover_probability: f64,
    /// Probability that a single bit is flipped.
    pub mutation_probability: f64,
    /// Minimum satisfactory fitness; the run stops as soon as it is reached.
    pub fitness_threshold: f64,
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 101,
            crossover_probability: 0.7,
            mutation_probability: 0.05,
            fitness_threshold: 1.0,
            seed: None,
        }
    }
}

impl ConfigSection for GeneticConfig {
    fn section_name() -> &'static str {
        "genetic"
    }

    fn validate(&self) -> Result<(), TrianglePathError> {
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(TrianglePathError::Configuration(format!(
                "Population size must be even and positive, got {}",
                self.population_size
            )));
        }
        if !(self.crossover_probability > 0.0 && self.crossover_probability < 1.0) {
            return Err(TrianglePathError::Configuration(
                "Crossover probability must be strictly between 0 and 1".to_string()
            ));
        }
        if !(self.mutation_probability > 0.0 && self.mutation_probability < 1.0) {
            return Err(TrianglePathError::Configuration(
                "Mutation probability must be strictly between 0 and 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.fitness_threshold) {
            return Err(TrianglePathError::Configuration(
                "Fitness threshold must be between 0 and 1".to_string()
            ));
        }
        Ok(())
    }
}
