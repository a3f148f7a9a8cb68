//! Component directory discovery.
//!
//! Uses the `ignore` crate to list the immediate subdirectories of the
//! components root. Ignore files and hidden-entry filtering are turned off:
//! every subdirectory is a candidate component.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use thiserror::Error;
use tracing::{debug, info};

use crate::analyzer::{analyze_component, AnalyzeOptions};
use crate::categories::CategoryTable;
use crate::model::Catalog;

/// Errors that can occur while listing component directories.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("components directory not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve the components root for a library checkout.
pub fn components_root(library: &Path, options: &AnalyzeOptions) -> PathBuf {
    library.join(&options.components_subdir)
}

/// List the immediate subdirectories of `root`, sorted by name.
///
/// # Examples
///
/// ```no_run
/// use compdoc::walker::component_dirs;
/// use std::path::Path;
///
/// for dir in component_dirs(Path::new("services/src/components/v2")).unwrap() {
///     println!("{}", dir.display());
/// }
/// ```
pub fn component_dirs(root: &Path) -> Result<Vec<PathBuf>, WalkError> {
    if !root.is_dir() {
        return Err(WalkError::NotFound {
            path: root.to_path_buf(),
        });
    }

    let walker = WalkBuilder::new(root)
        .max_depth(Some(1))
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut dirs = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                // Symlinked component directories count too
                if entry.depth() == 1 && entry.path().is_dir() {
                    dirs.push(entry.into_path());
                }
            }
            Err(ignore::Error::Io(io_err)) => {
                let path = root.to_path_buf();
                if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                    return Err(WalkError::PermissionDenied { path });
                }
                return Err(WalkError::Io {
                    path,
                    source: io_err,
                });
            }
            // Entry-level errors (e.g. a vanished child) just drop that entry
            Err(e) => debug!(error = %e, "skipping unreadable entry"),
        }
    }

    Ok(dirs)
}

/// Analyze every component directory under the library's components root.
///
/// Components are grouped by category in the order they are encountered.
/// Directories that do not produce a record are left out silently.
pub fn analyze_library(
    library: &Path,
    table: &CategoryTable,
    options: &AnalyzeOptions,
) -> Result<Catalog, WalkError> {
    let root = components_root(library, options);
    let dirs = component_dirs(&root)?;

    let mut catalog = Catalog::new();
    for dir in &dirs {
        if let Some(component) = analyze_component(dir, table, options) {
            catalog.insert(component);
        }
    }

    info!(
        root = %root.display(),
        directories = dirs.len(),
        components = catalog.total_components(),
        "analyzed component library"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;
    use std::fs;
    use tempfile::TempDir;

    fn create_library() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join(DEFAULT_SUBDIR);

        fs::create_dir_all(root.join("Modal")).unwrap();
        fs::write(
            root.join("Modal/Modal.tsx"),
            "interface ModalProps { open: boolean; }",
        )
        .unwrap();

        fs::create_dir_all(root.join("Button")).unwrap();
        fs::write(
            root.join("Button/Button.tsx"),
            "interface ButtonProps { label: string; disabled?: boolean; }",
        )
        .unwrap();

        fs::create_dir_all(root.join("ButtonGroup")).unwrap();
        fs::write(root.join("ButtonGroup/ButtonGroup.tsx"), "").unwrap();

        fs::create_dir_all(root.join("utils")).unwrap();
        fs::write(root.join("utils/utils.tsx"), "export {}").unwrap();

        fs::write(root.join("index.ts"), "export * from './Button';").unwrap();

        dir
    }

    const DEFAULT_SUBDIR: &str = crate::analyzer::DEFAULT_COMPONENTS_SUBDIR;

    #[test]
    fn test_component_dirs_lists_only_directories() {
        let dir = create_library();
        let root = dir.path().join(DEFAULT_SUBDIR);

        let names: Vec<String> = component_dirs(&root)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["Button", "ButtonGroup", "Modal", "utils"]);
    }

    #[test]
    fn test_component_dirs_includes_hidden_and_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join(".Hidden")).unwrap();
        fs::create_dir(dir.path().join("Ignored")).unwrap();
        fs::write(dir.path().join(".gitignore"), "Ignored/\n").unwrap();

        let dirs = component_dirs(dir.path()).unwrap();
        assert!(dirs.iter().any(|p| p.ends_with(".Hidden")));
        assert!(dirs.iter().any(|p| p.ends_with("Ignored")));
    }

    #[test]
    fn test_component_dirs_missing_root() {
        let result = component_dirs(Path::new("/nonexistent/components/v2"));
        assert!(matches!(result, Err(WalkError::NotFound { .. })));
    }

    #[test]
    fn test_component_dirs_root_is_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("v2");
        fs::write(&file, "").unwrap();
        assert!(matches!(component_dirs(&file), Err(WalkError::NotFound { .. })));
    }

    #[test]
    fn test_analyze_library_groups_by_category() {
        let dir = create_library();
        let catalog =
            analyze_library(dir.path(), &CategoryTable::default(), &AnalyzeOptions::default())
                .unwrap();

        let categories: Vec<_> = catalog.categories().collect();
        assert_eq!(categories, vec![Category::Actions, Category::Layouts]);

        let actions: Vec<_> = catalog
            .get(Category::Actions)
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(actions, vec!["Button", "ButtonGroup"]);
        assert_eq!(catalog.total_components(), 3);
        assert!(catalog.component("utils").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_component_dirs_follows_symlinked_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("shared/Button");
        fs::create_dir_all(&target).unwrap();
        fs::write(
            target.join("Button.tsx"),
            "interface ButtonProps { label: string; }",
        )
        .unwrap();

        let root = dir.path().join(DEFAULT_SUBDIR);
        fs::create_dir_all(&root).unwrap();
        std::os::unix::fs::symlink(&target, root.join("Button")).unwrap();
        fs::write(root.join("README.md"), "").unwrap();

        let dirs = component_dirs(&root).unwrap();
        assert_eq!(dirs, vec![root.join("Button")]);

        let catalog =
            analyze_library(dir.path(), &CategoryTable::default(), &AnalyzeOptions::default())
                .unwrap();
        assert!(catalog.component("Button").is_some());
        assert_eq!(catalog.total_components(), 1);
    }

    #[test]
    fn test_analyze_library_missing_components_root() {
        let dir = TempDir::new().unwrap();
        let result =
            analyze_library(dir.path(), &CategoryTable::default(), &AnalyzeOptions::default());
        assert!(matches!(result, Err(WalkError::NotFound { .. })));
    }

    #[test]
    fn test_analyze_library_empty_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(DEFAULT_SUBDIR)).unwrap();
        let catalog =
            analyze_library(dir.path(), &CategoryTable::default(), &AnalyzeOptions::default())
                .unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.total_components(), 0);
    }
}
