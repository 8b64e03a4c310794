pub mod indexing;
pub mod exhaustive;
pub mod dynamic;
pub mod genetic;
pub mod partitioned;
pub mod solver;

pub use dynamic::{bottom_up, bottom_up_sum};
pub use exhaustive::{exhaustive, exhaustive_all};
pub use genetic::evolutionary;
pub use indexing::level_offsets;
pub use partitioned::{parallel_exhaustive, partition_ranges};
pub use solver::solve;
