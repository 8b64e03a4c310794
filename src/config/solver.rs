use super::traits::ConfigSection;
use crate::error::TrianglePathError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverMethod {
    /// Bottom-up dynamic programming (always optimal)
    Dp,
    /// Every path, one thread
    Exhaustive,
    /// Every path, split across workers
    Parallel,
    /// Binary genetic algorithm (heuristic)
    Genetic,
}

impl SolverMethod {
    pub const ALL: [SolverMethod; 4] = [
        SolverMethod::Dp,
        SolverMethod::Exhaustive,
        SolverMethod::Parallel,
        SolverMethod::Genetic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SolverMethod::Dp => "dp",
            SolverMethod::Exhaustive => "exhaustive",
            SolverMethod::Parallel => "parallel",
            SolverMethod::Genetic => "genetic",
        }
    }
}

impl fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverMethod {
    type Err = TrianglePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolverMethod::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                TrianglePathError::Configuration(format!(
                    "Unknown solver method '{}', expected one of dp, exhaustive, parallel, genetic",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub method: SolverMethod,
    /// Number of timed repetitions when benchmarking a method.
    pub repetitions: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            method: SolverMethod::Dp,
            repetitions: 1,
        }
    }
}

impl ConfigSection for SolverConfig {
    fn section_name() -> &'static str {
        "solver"
    }

    fn validate(&self) -> Result<(), TrianglePathError> {
        if self.repetitions == 0 {
            return Err(TrianglePathError::Configuration(
                "Repetitions must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
