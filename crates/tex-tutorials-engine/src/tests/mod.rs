use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary tutorials directory
pub fn create_test_tutorials_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test tutorial source file with content
pub fn create_test_file(tutorials_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = tutorials_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
