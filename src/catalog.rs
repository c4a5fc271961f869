/// Problem catalog: the `*.txt` files directly inside the problems directory.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemEntry {
    pub path: PathBuf,
    pub filename: String,
    /// Empty until [`ProblemEntry::load`] runs.
    pub content: String,
}

impl ProblemEntry {
    fn new(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Self {
            path,
            filename,
            content: String::new(),
        }
    }

    pub fn load(&mut self) -> Result<()> {
        self.content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        Ok(())
    }
}

/// Non-recursive scan, in the order the filesystem returns. A missing
/// directory is an empty catalog.
pub fn build_catalog(dir: &Path) -> Result<Vec<ProblemEntry>> {
    let dir = std::path::absolute(dir)?;
    // Escape the directory so only the file name part is a pattern.
    let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy())).join("*.txt");

    let entries = glob::glob(&pattern.to_string_lossy())
        .map_err(|e| anyhow::anyhow!("{e}"))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .map(ProblemEntry::new)
        .collect();

    Ok(entries)
}

/// Read every entry's content. Any unreadable file aborts the run.
pub fn load_all(entries: &mut [ProblemEntry]) -> Result<()> {
    for entry in entries.iter_mut() {
        entry.load()?;
    }
    Ok(())
}
