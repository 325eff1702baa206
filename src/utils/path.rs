//! Path utilities: expand `~/` in user supplied paths, build dump file names.

use std::path::{Path, PathBuf};

/// `~/foo` → `$HOME/foo`; anything else is returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// `dir/stem.ext`
pub fn output_file(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    dir.join(format!("{stem}.{ext}"))
}
