pub mod traits;
pub mod genetic;
pub mod partition;
pub mod solver;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use genetic::GeneticConfig;
pub use partition::PartitionConfig;
pub use solver::{SolverConfig, SolverMethod};
pub use traits::ConfigSection;
