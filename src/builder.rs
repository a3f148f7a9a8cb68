//! Fluent builder API for compdoc.
//!
//! Wraps the walker, analyzer and output writers behind a single entry
//! point for library use.

use std::path::{Path, PathBuf};

use crate::analyzer::AnalyzeOptions;
use crate::categories::CategoryTable;
use crate::errors::CompdocError;
use crate::model::Catalog;
use crate::output::{prepare_output_dir, write_category_markdown, write_summary};
use crate::walker::analyze_library;

/// Version string recorded in the summary when none is given.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Builder for documenting a component library.
///
/// # Examples
///
/// ```no_run
/// use compdoc::builder::Compdoc;
///
/// let docs = Compdoc::new("./prism-ui")
///     .package("@acme/ui")
///     .generate("./docs", "2.44.0")
///     .unwrap();
///
/// println!("{} components", docs.total_components);
/// ```
pub struct Compdoc {
    library: PathBuf,
    table: CategoryTable,
    options: AnalyzeOptions,
}

impl Compdoc {
    /// Create a new builder for the given library checkout.
    pub fn new(library: impl Into<PathBuf>) -> Self {
        Self {
            library: library.into(),
            table: CategoryTable::default(),
            options: AnalyzeOptions::default(),
        }
    }

    /// Replace the category lookup tables.
    pub fn table(mut self, table: CategoryTable) -> Self {
        self.table = table;
        self
    }

    /// Replace all analysis options at once.
    pub fn options(mut self, options: AnalyzeOptions) -> Self {
        self.options = options;
        self
    }

    /// Storybook base URL prefixed to every component link.
    pub fn storybook_base(mut self, base: impl Into<String>) -> Self {
        self.options.storybook_base = base.into();
        self
    }

    /// Package named in import statements.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.options.package = package.into();
        self
    }

    /// Components root relative to the library path.
    pub fn components_subdir(mut self, subdir: impl Into<PathBuf>) -> Self {
        self.options.components_subdir = subdir.into();
        self
    }

    /// Skip an additional directory name.
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.options.excluded_dirs.push(name.into());
        self
    }

    /// Analyze the library without writing anything.
    pub fn analyze(&self) -> Result<Catalog, CompdocError> {
        Ok(analyze_library(&self.library, &self.table, &self.options)?)
    }

    /// Analyze the library and write all documentation under `out`.
    ///
    /// Nothing is created when the components root is missing.
    pub fn generate(
        &self,
        out: impl AsRef<Path>,
        version: &str,
    ) -> Result<GeneratedDocs, CompdocError> {
        let catalog = self.analyze()?;
        write_docs(out.as_ref(), &catalog, version, |_| {})
    }
}

/// Files written by a generation run.
#[derive(Debug)]
pub struct GeneratedDocs {
    /// One markdown file per populated category, in catalog order.
    pub category_files: Vec<PathBuf>,
    /// The JSON summary.
    pub summary_file: PathBuf,
    /// Components documented across all categories.
    pub total_components: usize,
}

impl GeneratedDocs {
    /// All written files, summary last.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.category_files
            .iter()
            .map(PathBuf::as_path)
            .chain(std::iter::once(self.summary_file.as_path()))
    }
}

/// Write every category document and the summary for an analyzed catalog.
///
/// `on_write` is called with each path right after that file is written.
/// Files are written one at a time; a failure leaves earlier files in place.
pub fn write_docs(
    out: &Path,
    catalog: &Catalog,
    version: &str,
    mut on_write: impl FnMut(&Path),
) -> Result<GeneratedDocs, CompdocError> {
    prepare_output_dir(out)?;

    let mut category_files = Vec::new();
    for (category, components) in catalog.iter() {
        let path = write_category_markdown(out, category, components)?;
        on_write(&path);
        category_files.push(path);
    }

    let summary_file = write_summary(out, catalog, version)?;
    on_write(&summary_file);

    Ok(GeneratedDocs {
        category_files,
        summary_file,
        total_components: catalog.total_components(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;
    use std::fs;
    use tempfile::TempDir;

    fn create_library() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("services/src/components/v2");
        fs::create_dir_all(root.join("Button")).unwrap();
        fs::write(
            root.join("Button/Button.tsx"),
            "interface ButtonProps { label: string; }",
        )
        .unwrap();
        fs::create_dir_all(root.join("Chart")).unwrap();
        fs::write(root.join("Chart/Chart.tsx"), "").unwrap();
        dir
    }

    #[test]
    fn test_builder_analyze() {
        let dir = create_library();
        let catalog = Compdoc::new(dir.path()).analyze().unwrap();
        assert_eq!(catalog.total_components(), 2);
        assert_eq!(
            catalog.component("Chart").unwrap().category,
            Category::Utility
        );
    }

    #[test]
    fn test_builder_options() {
        let dir = create_library();
        let catalog = Compdoc::new(dir.path())
            .table(CategoryTable::default().with_component("Chart", Category::Dashboard))
            .package("@acme/ui")
            .storybook_base("https://sb/#")
            .exclude_dir("Button")
            .analyze()
            .unwrap();

        assert!(catalog.component("Button").is_none());
        let chart = catalog.component("Chart").unwrap();
        assert_eq!(chart.category, Category::Dashboard);
        assert_eq!(chart.import_statement, "import { Chart } from '@acme/ui'");
        assert_eq!(chart.storybook_url, "https://sb/#/Layouts/Dashboard?id=chart");
    }

    #[test]
    fn test_builder_custom_subdir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/Alert")).unwrap();
        fs::write(dir.path().join("src/Alert/Alert.tsx"), "").unwrap();

        let catalog = Compdoc::new(dir.path())
            .components_subdir("src")
            .analyze()
            .unwrap();
        assert_eq!(catalog.get(Category::DataDisplay).unwrap().len(), 1);
    }

    #[test]
    fn test_generate_writes_everything() {
        let dir = create_library();
        let out = TempDir::new().unwrap();

        let docs = Compdoc::new(dir.path())
            .generate(out.path(), UNKNOWN_VERSION)
            .unwrap();

        assert_eq!(docs.total_components, 2);
        assert_eq!(docs.category_files.len(), 2);
        assert_eq!(docs.files().count(), 3);
        for file in docs.files() {
            assert!(file.is_file(), "{}", file.display());
        }
    }

    #[test]
    fn test_write_docs_reports_each_file() {
        let dir = create_library();
        let out = TempDir::new().unwrap();
        let catalog = Compdoc::new(dir.path()).analyze().unwrap();

        let mut seen = Vec::new();
        let docs = write_docs(out.path(), &catalog, "1.0.0", |p| {
            seen.push(p.to_path_buf())
        })
        .unwrap();

        assert_eq!(seen.len(), 3);
        assert_eq!(seen.last(), Some(&docs.summary_file));
        assert!(seen[0].ends_with("components/actions.md"));
    }

    #[test]
    fn test_generate_missing_root_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");

        let result = Compdoc::new(dir.path()).generate(&out, "1.0.0");
        assert!(matches!(result, Err(CompdocError::ComponentsDirNotFound(_))));
        assert!(!out.exists());
    }
}
