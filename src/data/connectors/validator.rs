use crate::error::{Result, TrianglePathError};

pub struct TriangleValidator;

impl TriangleValidator {
    /// Validate that level `i` holds exactly `i + 2` nodes.
    ///
    /// `first_line` is the source line of level 0, used in error messages.
    pub fn validate_levels(levels: &[Vec<u32>], first_line: usize) -> Result<()> {
        if levels.is_empty() {
            return Err(TrianglePathError::Parse {
                line: first_line,
                message: "triangle has no levels below the root".to_string(),
            });
        }

        for (i, level) in levels.iter().enumerate() {
            if level.len() != i + 2 {
                return Err(TrianglePathError::Parse {
                    line: first_line + i,
                    message: format!("level {} must have {} nodes, found {}", i, i + 2, level.len()),
                });
            }
        }

        Ok(())
    }

    /// Number of zero-valued nodes. Not an error, but a triangle of zeros
    /// leaves roulette selection without any positive fitness.
    pub fn count_zero_nodes(levels: &[Vec<u32>]) -> usize {
        levels.iter().flatten().filter(|&&v| v == 0).count()
    }
}
