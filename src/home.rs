use std::env;
use std::path::{self, Path, PathBuf};

/// Resolve the Sparrow installation root.
///
/// Precedence: the hidden internal flag wins over the public
/// `--sparrow-home` flag, which wins over the computed default (the
/// parent of the directory containing the running binary). Empty flag
/// values are treated as absent. The result is not checked for
/// existence; entry points that consume it report missing installs
/// themselves.
pub fn resolve(internal: Option<&str>, explicit: Option<&str>) -> PathBuf {
    if let Some(path) = non_empty(internal) {
        return PathBuf::from(path);
    }
    if let Some(path) = non_empty(explicit) {
        return PathBuf::from(path);
    }
    default_home()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn default_home() -> PathBuf {
    let exe = env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
    let home = exe
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    path::absolute(&home).unwrap_or(home)
}
