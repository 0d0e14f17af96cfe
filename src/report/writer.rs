use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// `{output_dir}/report-{year}-Q{quarter}.md`
pub fn default_output_path(output_dir: impl AsRef<Path>, year: i32, quarter: u32) -> PathBuf {
    output_dir
        .as_ref()
        .join(format!("report-{year}-Q{quarter}.md"))
}

/// Write the rendered report, replacing any existing file.
/// The containing directory is created when missing.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!(dir = %parent.display(), "creating output directory");
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, contents)?;
    Ok(())
}
