//! Home-relative paths in the configuration (`~` or `~/...`).

use std::path::{Path, PathBuf};

/// Resolve a leading `~` component against the home directory. Anything
/// else, including `~user/...`, is returned as written.
pub fn expand_home(raw: &str) -> PathBuf {
    let path = Path::new(raw);
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
