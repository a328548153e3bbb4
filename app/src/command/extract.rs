use std::path::PathBuf;

use tracing::{info, warn};
use ukhan_font::FontMapper;

/// Arguments for the extract command.
pub struct ExtractInput {
    pub input: PathBuf,
    pub output: PathBuf,
    pub font_map: PathBuf,
    pub font: String,
}

/// Strategy that remaps legacy-font page text to Unicode.
///
/// The input stands in for the external page reader: one text file with
/// pages separated by form feed. Each non-empty page is remapped through
/// the injected `FontMapper` and emitted under a `--- Page <n> ---` marker
/// for the clean command to consume. Blank pages are skipped but keep
/// their page number.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        info!("extracting text from: {}", input.input.display());
        let raw = super::read_input(&input.input)?;

        let mapper = FontMapper::from_path(&input.font_map)?;
        if !mapper.has_font(&input.font) {
            anyhow::bail!(
                "font {} not present in mapping table {}",
                input.font,
                input.font_map.display()
            );
        }

        let pages: Vec<&str> = raw.split('\u{000C}').collect();
        info!("processing {} pages", pages.len());

        let mut mapped_pages = Vec::with_capacity(pages.len());
        let mut skipped = 0usize;
        for (index, page) in pages.iter().enumerate() {
            if page.trim().is_empty() {
                skipped += 1;
                continue;
            }
            let unicode = mapper.map_to_unicode(page, &input.font)?;
            mapped_pages.push(format!("--- Page {} ---\n{unicode}\n", index + 1));
        }
        if skipped > 0 {
            warn!("skipped {skipped} blank pages");
        }

        let full_text = mapped_pages.join("\n");
        super::write_output(&input.output, &full_text)?;

        println!("✓ Extraction complete: {}", input.output.display());
        println!("  Pages processed: {}", pages.len());
        println!("  Total characters extracted: {}", full_text.chars().count());
        Ok(())
    }
}
