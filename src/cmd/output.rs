use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Write `text` to `output_file`, or to stdout when none is given.
pub fn output_text(text: &str, output_file: Option<PathBuf>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file =
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(text.as_bytes())?;
        eprintln!("💾 Saved {} bytes to {}", text.len(), path.display());
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Comment line naming the source of the artifact that follows.
pub fn source_header(path: &std::path::Path) -> String {
    format!("// ─── {} ───\n", path.display())
}
