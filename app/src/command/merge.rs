use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use ukhan_core::{Record, merge};

/// Arguments for the merge command.
pub struct MergeInput {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
}

/// Strategy that unions several record files, drops duplicate riddles and
/// reassigns ids.
#[derive(Debug, Clone, Copy)]
pub struct MergeStrategy;

impl super::CommandStrategy for MergeStrategy {
    type Input = MergeInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut batches: Vec<Vec<Record>> = Vec::with_capacity(input.inputs.len());
        for path in &input.inputs {
            info!("reading: {}", path.display());
            let contents = super::read_input(path)?;
            let records: Vec<Record> = serde_json::from_str(&contents)
                .with_context(|| format!("invalid record file: {}", path.display()))?;
            batches.push(records);
        }

        let outcome = merge(batches);

        let json = serde_json::to_string_pretty(&outcome.records)?;
        super::write_output(&input.output, &json)?;

        println!("✓ Merged {} files", input.inputs.len());
        println!("  Total riddles: {}", outcome.total);
        println!("  Unique riddles: {}", outcome.records.len());
        println!("  Output: {}", input.output.display());
        Ok(())
    }
}
