use super::validator::TriangleValidator;
use crate::error::{Result, TrianglePathError};
use crate::types::TriangleData;
use std::path::Path;

/// Reads triangles from plain text.
///
/// The first line holds the root node; every following line is one level,
/// nodes separated by whitespace. Trailing blank lines are ignored.
pub struct TextConnector;

impl TextConnector {
    /// Parse triangle text into the root node and its levels.
    pub fn parse(text: &str) -> Result<(u32, Vec<Vec<u32>>)> {
        let mut lines = text.trim_end().lines().enumerate();

        let root_node = match lines.next() {
            Some((i, line)) => {
                let values = Self::parse_line(line, i + 1)?;
                match values.as_slice() {
                    [root] => *root,
                    _ => {
                        return Err(TrianglePathError::Parse {
                            line: i + 1,
                            message: format!("root line must hold one node, found {}", values.len()),
                        })
                    }
                }
            }
            None => {
                return Err(TrianglePathError::Parse {
                    line: 1,
                    message: "empty input".to_string(),
                })
            }
        };

        let levels = lines
            .map(|(i, line)| Self::parse_line(line, i + 1))
            .collect::<Result<Vec<_>>>()?;

        TriangleValidator::validate_levels(&levels, 2)?;

        Ok((root_node, levels))
    }

    /// Parse and prepare triangle text.
    pub fn parse_prepared(text: &str) -> Result<TriangleData> {
        let (root_node, levels) = Self::parse(text)?;

        let zeros = TriangleValidator::count_zero_nodes(&levels);
        if zeros > 0 {
            log::warn!("{} zero-valued nodes detected", zeros);
        }

        TriangleData::prepare(root_node, levels)
    }

    /// Load and prepare a triangle text file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<TriangleData> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Read {} bytes from {}", text.len(), path.as_ref().display());
        Self::parse_prepared(&text)
    }

    fn parse_line(line: &str, line_number: usize) -> Result<Vec<u32>> {
        line.split_whitespace()
            .map(|token| {
                token.parse::<u32>().map_err(|e| TrianglePathError::Parse {
                    line: line_number,
                    message: format!("invalid node '{}': {}", token, e),
                })
            })
            .collect()
    }
}
