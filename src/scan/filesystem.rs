use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const SNAPSHOT_EXTENSIONS: [&str; 2] = ["toml", "json"];

/// Snapshot candidates under `root`, sorted by path. Hidden directories and
/// the files named in `skip` are left out.
pub fn list_snapshot_files(root: &Path, skip: &[&str]) -> Vec<PathBuf> {
    let mut files = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            !skip.iter().any(|skipped| name == *skipped)
        })
        .map(|entry| entry.into_path())
        .filter(|path| has_snapshot_extension(path))
        .collect::<Vec<_>>();
    files.sort();
    files
}

pub fn has_snapshot_extension(path: &Path) -> bool {
    extension(path)
        .map(|ext| SNAPSHOT_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Lowercased file extension.
pub fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
