pub mod chromosome;
pub mod operators;
pub mod engine;
pub mod progress;
pub mod triangle;

pub use chromosome::{Chromosome, Population};
pub use engine::{EvolutionOutcome, FitnessFunction, GeneticEngine, ProgressCallback};
pub use progress::LogProgressCallback;
pub use triangle::{evolutionary, population_limit, PathFitness};
