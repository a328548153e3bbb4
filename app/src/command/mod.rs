//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is its own strategy type with a typed input, dispatched
//! statically from `main`. Shared file-boundary helpers live here so every
//! command validates inputs and writes output the same way.

use std::path::Path;

use anyhow::Context;

mod clean;
mod extract;
mod merge;
mod version;

pub use clean::{CleanInput, CleanStrategy};
pub use extract::{ExtractInput, ExtractStrategy};
pub use merge::{MergeInput, MergeStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type, enabling type-safe parameter
/// passing without runtime casting or boxing.
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Read an input file, failing before any processing when it is missing
/// or not valid UTF-8.
fn read_input(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("input file not found: {}", path.display());
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file: {}", path.display()))
}

/// Write the finished output in one shot, creating parent directories.
///
/// Nothing is written until the whole pipeline has completed, so a failed
/// run leaves no partial output file behind.
fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write output file: {}", path.display()))
}
