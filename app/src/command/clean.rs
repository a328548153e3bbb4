use std::path::PathBuf;

use tracing::info;
use ukhan_core::Pipeline;

/// Arguments for the clean command.
pub struct CleanInput {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Strategy that runs the full cleaning pipeline over one extracted text
/// file and writes the structured record set.
#[derive(Debug, Clone, Copy)]
pub struct CleanStrategy;

impl super::CommandStrategy for CleanStrategy {
    type Input = CleanInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        info!("reading input file: {}", input.input.display());
        let text = super::read_input(&input.input)?;

        info!("parsing riddles");
        let outcome = Pipeline::with_defaults().run(&text);
        println!("  Found {} riddles", outcome.stats.extracted);
        println!("  {} unique riddles", outcome.stats.unique);

        if !outcome.warnings.is_empty() {
            println!("\nWarnings:");
            for warning in outcome.warnings.iter().take(10) {
                println!("  ⚠ {warning}");
            }
            if outcome.warnings.len() > 10 {
                println!("  ... and {} more warnings", outcome.warnings.len() - 10);
            }
        }

        let json = serde_json::to_string_pretty(&outcome.records)?;
        super::write_output(&input.output, &json)?;

        println!("\n✓ Cleaning complete: {}", input.output.display());
        println!("  Valid riddles: {}", outcome.stats.valid);
        println!("\nNext steps:");
        println!("  1. Review the output file for accuracy");
        println!("  2. Manually add categories and difficulty levels if needed");
        println!("  3. Correct any OCR errors in riddles/answers");
        Ok(())
    }
}
