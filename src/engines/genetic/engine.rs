use crate::config::{ConfigSection, GeneticConfig};
use crate::engines::genetic::{
    chromosome::{Chromosome, Population},
    operators::{crossover, generate, mutate, select},
};
use crate::error::{precondition, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Maps a population to one fitness value in `[0, 1]` per chromosome.
///
/// Any additional data the evaluation needs lives in the implementing value.
pub trait FitnessFunction {
    fn evaluate(&self, population: &[Chromosome]) -> Vec<f64>;
}

impl<F> FitnessFunction for F
where
    F: Fn(&[Chromosome]) -> Vec<f64>,
{
    fn evaluate(&self, population: &[Chromosome]) -> Vec<f64> {
        self(population)
    }
}

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_score: f64, generation_best: f64);
}

/// Best chromosome seen over a whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOutcome {
    pub chromosome: Chromosome,
    pub score: f64,
    /// Generations bred after the initial population.
    pub generations: usize,
}

pub struct GeneticEngine {
    config: GeneticConfig,
    rng: StdRng,
}

impl GeneticEngine {
    pub fn new(config: GeneticConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self { config, rng })
    }

    /// Run the evolution process.
    ///
    /// Stops once the best score reaches the fitness threshold or after
    /// `max_generations` generations. The best chromosome is tracked outside
    /// the stochastic operators, so it is never lost; it is replaced only by
    /// a strictly better one.
    pub fn run<F, C>(
        &mut self,
        fitness: &F,
        chromosome_length: usize,
        mut callback: C,
    ) -> Result<EvolutionOutcome>
    where
        F: FitnessFunction + ?Sized,
        C: ProgressCallback,
    {
        let mut population = generate(self.config.population_size, chromosome_length, &mut self.rng)?;
        let mut scores = self.evaluate(fitness, &population)?;

        let alpha = best_index(&scores);
        let mut alpha_chromosome = population[alpha].clone();
        let mut alpha_score = scores[alpha];

        let mut generations = 0;
        for generation in 0..self.config.max_generations {
            if alpha_score >= self.config.fitness_threshold {
                break;
            }
            callback.on_generation_start(generation);

            population = select(&population, &scores, &mut self.rng)?;
            population = crossover(population, self.config.crossover_probability, &mut self.rng)?;
            population = mutate(population, self.config.mutation_probability, &mut self.rng)?;

            scores = self.evaluate(fitness, &population)?;
            generations = generation + 1;

            let alpha = best_index(&scores);
            if alpha_score < scores[alpha] {
                alpha_chromosome = population[alpha].clone();
                alpha_score = scores[alpha];
            }

            callback.on_generation_complete(generation, alpha_score, scores[alpha]);
        }

        Ok(EvolutionOutcome {
            chromosome: alpha_chromosome,
            score: alpha_score,
            generations,
        })
    }

    fn evaluate<F>(&self, fitness: &F, population: &Population) -> Result<Vec<f64>>
    where
        F: FitnessFunction + ?Sized,
    {
        let scores = fitness.evaluate(population);
        if scores.len() != population.len() {
            return precondition(format!(
                "fitness function returned {} scores for {} chromosomes",
                scores.len(),
                population.len()
            ));
        }
        Ok(scores)
    }
}

/// Index of the first maximum score.
fn best_index(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = i;
        }
    }
    best
}
