use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{Result, SubmitGuardError};

/// Discovers `.java` files under the given roots.
///
/// Paths are returned sorted and deduplicated so downstream analysis is
/// deterministic regardless of filesystem iteration order. The core is
/// agnostic to how paths were discovered; a bare file path is accepted
/// as-is.
pub struct JavaFileDiscovery {
    exclude: GlobSet,
}

impl JavaFileDiscovery {
    /// # Errors
    /// Returns an error if an exclude pattern is not valid glob syntax.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|source| SubmitGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let exclude = builder
            .build()
            .map_err(|source| SubmitGuardError::InvalidPattern {
                pattern: exclude_patterns.join(", "),
                source,
            })?;
        Ok(Self { exclude })
    }

    #[must_use]
    pub fn discover(&self, roots: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for root in roots {
            if root.is_file() {
                files.push(root.clone());
                continue;
            }
            files.extend(
                WalkDir::new(root)
                    .into_iter()
                    .filter_map(std::result::Result::ok)
                    .filter(|e| e.file_type().is_file())
                    .filter(|e| is_java(e.path()) && !self.exclude.is_match(e.path()))
                    .map(walkdir::DirEntry::into_path),
            );
        }
        files.sort();
        files.dedup();
        files
    }
}

fn is_java(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("java")
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
