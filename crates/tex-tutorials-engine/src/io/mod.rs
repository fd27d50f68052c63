use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{Component, RelativePath, RelativePathBuf};

use crate::models::Tutorial;
use crate::parsing::ParseOptions;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Tutorial not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid tutorials directory: {0}")]
    InvalidTutorialsDir(String),
    #[error("Invalid tutorial slug: {0:?}")]
    InvalidSlug(String),
}

/// File extension of tutorial sources.
pub const TUTORIAL_EXTENSION: &str = "tex";

/// Read a file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Relative source path for a slug, e.g. `recursion` -> `recursion.tex`.
///
/// A slug is a single plain path component; anything that could escape the
/// tutorials directory is rejected.
pub fn tutorial_relative_path(slug: &str) -> Result<RelativePathBuf, IoError> {
    let mut components = RelativePath::new(slug).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == slug && !slug.contains('\\') => {
            Ok(RelativePathBuf::from(format!("{slug}.{TUTORIAL_EXTENSION}")))
        }
        _ => Err(IoError::InvalidSlug(slug.to_string())),
    }
}

/// Read the raw source of the tutorial `slug` from `tutorials_dir`
pub fn read_tutorial(slug: &str, tutorials_dir: &Path) -> Result<String, IoError> {
    let path = tutorial_relative_path(slug)?.to_path(tutorials_dir);
    read_file(&path)
}

/// Load and parse the tutorial `slug`
pub fn load_tutorial(
    slug: &str,
    tutorials_dir: &Path,
    options: &ParseOptions,
) -> Result<Tutorial, IoError> {
    let relative_path = tutorial_relative_path(slug)?;
    let src = read_file(&relative_path.to_path(tutorials_dir))?;
    let tutorial = Tutorial::from_source(relative_path, &src, options);
    for warning in &tutorial.warnings {
        log::warn!("{slug}: {warning}");
    }
    Ok(tutorial)
}

/// Slugs of all tutorials directly inside `tutorials_dir`, sorted
pub fn list_tutorial_slugs(tutorials_dir: &Path) -> Result<Vec<String>, IoError> {
    validate_tutorials_dir(tutorials_dir)?;

    let mut slugs = Vec::new();
    for entry in fs::read_dir(tutorials_dir).map_err(IoError::Io)? {
        let path = entry.map_err(IoError::Io)?.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != TUTORIAL_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            slugs.push(stem.to_string());
        }
    }

    slugs.sort();
    Ok(slugs)
}

/// Load every tutorial in catalogue order.
///
/// Only an invalid directory is an error; a tutorial that cannot be read is
/// logged and left out of the catalogue.
pub fn load_all_tutorials(
    tutorials_dir: &Path,
    options: &ParseOptions,
) -> Result<Vec<Tutorial>, IoError> {
    let mut tutorials: Vec<Tutorial> = list_tutorial_slugs(tutorials_dir)?
        .iter()
        .filter_map(|slug| match load_tutorial(slug, tutorials_dir, options) {
            Ok(tutorial) => Some(tutorial),
            Err(e) => {
                log::warn!("Skipping tutorial {slug}: {e}");
                None
            }
        })
        .collect();
    tutorials.sort_by(Tutorial::catalogue_cmp);
    Ok(tutorials)
}

/// Validate that a tutorials directory exists
pub fn validate_tutorials_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidTutorialsDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }
    Ok(())
}
