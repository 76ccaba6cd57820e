use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Find the project root by walking up from `start` until a directory
/// containing a `.git` folder or a `config.yml` file is found.
pub fn find_project_root(start: &Path) -> io::Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(".git").exists() || current.join("config.yml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine the project root directory",
            ));
        }
    }
}

/// List the immediate subdirectories of `path`, sorted by name
pub fn list_dirs<P: AsRef<Path>>(path: P) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let entry_path = entry.path();
        if entry_path.is_dir() {
            dirs.push(entry_path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// List files in a directory, optionally filtering by extension
pub fn list_files<P: AsRef<Path>>(path: P, extension: Option<&str>) -> io::Result<Vec<PathBuf>> {
    let extension_lower = extension.map(str::to_lowercase);
    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let entry_path = entry.path();
        if !entry_path.is_file() {
            continue;
        }
        let matches = match (&extension_lower, entry_path.extension()) {
            (None, _) => true,
            (Some(want), Some(ext)) => ext.to_string_lossy().to_lowercase() == *want,
            (Some(_), None) => false,
        };
        if matches {
            files.push(entry_path);
        }
    }
    files.sort();
    Ok(files)
}
