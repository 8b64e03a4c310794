use super::traits::ConfigSection;
use crate::error::TrianglePathError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// Number of partitions the path-index space is split into.
    pub worker_count: usize,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            worker_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

impl ConfigSection for PartitionConfig {
    fn section_name() -> &'static str {
        "partition"
    }

    fn validate(&self) -> Result<(), TrianglePathError> {
        if self.worker_count == 0 {
            return Err(TrianglePathError::Configuration(
                "Worker count must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
