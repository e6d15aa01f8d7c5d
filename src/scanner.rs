use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks a project directory collecting the Rust files that may define implementation types.
///
/// `target` and hidden directories are skipped.
pub struct FileScanner {
    root_path: PathBuf,
}

/// Files found by a scan, plus warnings for entries that could not be read.
#[derive(Debug)]
pub struct ScanResult {
    pub rust_files: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

impl FileScanner {
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Scans the directory tree and collects all `.rs` files.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is missing or is not a directory. Failures below the root
    /// are recorded as warnings and scanning continues.
    pub fn scan(&self) -> Result<ScanResult> {
        let metadata = std::fs::metadata(&self.root_path)
            .with_context(|| format!("Cannot access {}", self.root_path.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("Not a directory: {}", self.root_path.display());
        }

        let mut rust_files = Vec::new();
        let mut warnings = Vec::new();

        let walker = WalkDir::new(&self.root_path)
            .into_iter()
            .filter_entry(|e| e.path() == self.root_path || !Self::is_ignored(e.path()));

        for entry in walker {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("rs") {
                        rust_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        rust_files.sort();
        debug!(
            "Found {} Rust files under {}",
            rust_files.len(),
            self.root_path.display()
        );

        Ok(ScanResult {
            rust_files,
            warnings,
        })
    }

    fn is_ignored(path: &Path) -> bool {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        file_name.starts_with('.') || file_name == "target"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_names(result: &ScanResult) -> Vec<String> {
        result
            .rust_files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_scan_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src/models")).unwrap();
        fs::write(root.join("src/lib.rs"), "pub mod models;").unwrap();
        fs::write(root.join("src/models/widget.rs"), "pub struct Widget;").unwrap();
        fs::write(root.join("README.md"), "# Widgets").unwrap();

        let result = FileScanner::new(root.to_path_buf()).scan().unwrap();

        assert!(result.warnings.is_empty());
        assert_eq!(file_names(&result), vec!["lib.rs", "widget.rs"]);
    }

    #[test]
    fn test_scan_skips_target_and_hidden_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("target")).unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join("target/build.rs"), "fn main() {}").unwrap();
        fs::write(root.join(".git/hook.rs"), "fn main() {}").unwrap();
        fs::write(root.join("models.rs"), "pub struct Widget;").unwrap();

        let result = FileScanner::new(root.to_path_buf()).scan().unwrap();

        assert_eq!(file_names(&result), vec!["models.rs"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = FileScanner::new(temp_dir.path().to_path_buf()).scan().unwrap();

        assert!(result.rust_files.is_empty());
    }

    #[test]
    fn test_scan_rejects_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        assert!(FileScanner::new(missing).scan().is_err());
    }

    #[test]
    fn test_scan_rejects_file_root() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("models.rs");
        fs::write(&file, "pub struct Widget;").unwrap();

        let err = FileScanner::new(file).scan().unwrap_err();

        assert!(err.to_string().contains("Not a directory"));
    }

    #[test]
    fn test_scan_result_debug_output() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("models.rs"), "pub struct Widget;").unwrap();

        let result = FileScanner::new(temp_dir.path().to_path_buf()).scan().unwrap();
        let debug = format!("{:?}", result);

        assert!(debug.contains("models.rs"));
        assert!(debug.contains("warnings: []"));
    }
}
