//! Per-directory component analysis.
//!
//! Turns one component directory into a [`ComponentInfo`]. Unreadable files
//! are never fatal here: a missing or unreadable source file yields no
//! record, and an unreadable examples file yields empty notes and examples.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::categories::CategoryTable;
use crate::model::ComponentInfo;
use crate::props::extract_props;
use crate::usage::{extract_accessibility_notes, extract_code_examples};

/// Components root relative to the library checkout.
pub const DEFAULT_COMPONENTS_SUBDIR: &str = "services/src/components/v2";
/// Prefix of every storybook link.
pub const DEFAULT_STORYBOOK_BASE: &str = "http://prism-styleguide/v2/#";
/// Package named in generated import statements.
pub const DEFAULT_PACKAGE: &str = "@nutanix-ui/prism-reactjs";
/// Directory names under the components root that are never components.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["__snapshots__", "v2", "styles", "utils"];

/// Options for analyzing a component library.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Path of the components root relative to the library path.
    pub components_subdir: PathBuf,
    /// Directory names skipped as scaffolding.
    pub excluded_dirs: Vec<String>,
    /// Storybook base URL, joined with the category fragment and component name.
    pub storybook_base: String,
    /// Package the import statement points at.
    pub package: String,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            components_subdir: PathBuf::from(DEFAULT_COMPONENTS_SUBDIR),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            storybook_base: DEFAULT_STORYBOOK_BASE.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
        }
    }
}

impl AnalyzeOptions {
    /// Whether a directory name is on the exclusion list.
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == dir_name)
    }

    /// `import { Name } from '<package>'`
    pub fn import_statement(&self, component: &str) -> String {
        format!("import {{ {} }} from '{}'", component, self.package)
    }
}

/// Pick the component's primary source file.
///
/// Prefers `<dir>/<name>.tsx`, then the first `.tsx` file (alphabetically)
/// that is not a `.spec.tsx` test.
pub fn find_source_file(dir: &Path, name: &str) -> Option<PathBuf> {
    let preferred = dir.join(format!("{name}.tsx"));
    if preferred.is_file() {
        return Some(preferred);
    }

    let dir_str = dir.to_str()?;
    let pattern = format!("{}/*.tsx", glob::Pattern::escape(dir_str));
    glob::glob(&pattern)
        .ok()?
        .filter_map(Result::ok)
        .find(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.ends_with(".spec.tsx"))
        })
}

/// Analyze a single component directory.
///
/// Returns `None` for excluded directories, directories without a usable
/// source file, and source files that cannot be read.
pub fn analyze_component(
    dir: &Path,
    table: &CategoryTable,
    options: &AnalyzeOptions,
) -> Option<ComponentInfo> {
    let name = dir.file_name()?.to_str()?;

    if options.is_excluded(name) {
        debug!(dir = %dir.display(), "skipping excluded directory");
        return None;
    }

    let Some(source_path) = find_source_file(dir, name) else {
        debug!(dir = %dir.display(), "no component source file");
        return None;
    };

    let source = match fs::read_to_string(&source_path) {
        Ok(source) => source,
        Err(e) => {
            debug!(path = %source_path.display(), error = %e, "unreadable component source");
            return None;
        }
    };

    let props = extract_props(&source, &format!("{name}Props"));

    let examples_path = dir.join(format!("{name}.examples.md"));
    let (accessibility_notes, examples) = if examples_path.exists() {
        match fs::read_to_string(&examples_path) {
            Ok(text) => (
                extract_accessibility_notes(&text),
                extract_code_examples(&text),
            ),
            Err(e) => {
                debug!(path = %examples_path.display(), error = %e, "unreadable examples file");
                (Vec::new(), Vec::new())
            }
        }
    } else {
        (Vec::new(), Vec::new())
    };

    let category = table.category_for(name);
    let storybook_url = format!(
        "{}{}{}",
        options.storybook_base,
        table.storybook_path(category),
        name.to_lowercase()
    );

    Some(ComponentInfo {
        name: name.to_string(),
        category,
        props,
        accessibility_notes,
        storybook_url,
        import_statement: options.import_statement(name),
        examples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;
    use std::fs;
    use tempfile::TempDir;

    fn component(root: &Path, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        for (file, contents) in files {
            fs::write(dir.join(file), contents).unwrap();
        }
        dir
    }

    fn analyze(dir: &Path) -> Option<ComponentInfo> {
        analyze_component(dir, &CategoryTable::default(), &AnalyzeOptions::default())
    }

    #[test]
    fn test_analyze_button() {
        let root = TempDir::new().unwrap();
        let dir = component(
            root.path(),
            "Button",
            &[
                (
                    "Button.tsx",
                    "interface ButtonProps { label: string; disabled?: boolean; }",
                ),
                (
                    "Button.examples.md",
                    "## Accessibility\nUse aria-label for icon-only buttons.\n\n```jsx\n<Button label=\"Go\" />\n```\n",
                ),
            ],
        );

        let info = analyze(&dir).unwrap();
        assert_eq!(info.name, "Button");
        assert_eq!(info.category, Category::Actions);
        assert_eq!(info.props.len(), 2);
        assert_eq!(
            info.storybook_url,
            "http://prism-styleguide/v2/#/Components/Actions?id=button"
        );
        assert_eq!(
            info.import_statement,
            "import { Button } from '@nutanix-ui/prism-reactjs'"
        );
        assert_eq!(
            info.accessibility_notes,
            vec!["## Accessibility", "Use aria-label for icon-only buttons."]
        );
        assert_eq!(info.examples, vec!["<Button label=\"Go\" />"]);
    }

    #[test]
    fn test_unmapped_component_is_utility() {
        let root = TempDir::new().unwrap();
        let dir = component(root.path(), "Widget", &[("Widget.tsx", "export {}")]);

        let info = analyze(&dir).unwrap();
        assert_eq!(info.category, Category::Utility);
        assert!(info.props.is_empty());
        assert!(info.accessibility_notes.is_empty());
        assert!(info.examples.is_empty());
        assert_eq!(
            info.storybook_url,
            "http://prism-styleguide/v2/#/Higher-Order%20Components?id=widget"
        );
    }

    #[test]
    fn test_excluded_directories() {
        let root = TempDir::new().unwrap();
        for name in DEFAULT_EXCLUDED_DIRS {
            let file = format!("{name}.tsx");
            let dir = component(root.path(), name, &[(file.as_str(), "")]);
            assert!(analyze(&dir).is_none(), "{name}");
        }
    }

    #[test]
    fn test_no_source_file() {
        let root = TempDir::new().unwrap();
        let dir = component(root.path(), "Empty", &[("README.md", "# nothing")]);
        assert!(analyze(&dir).is_none());
    }

    #[test]
    fn test_only_spec_file() {
        let root = TempDir::new().unwrap();
        let dir = component(root.path(), "Tabs", &[("Tabs.spec.tsx", "test()")]);
        assert!(analyze(&dir).is_none());
    }

    #[test]
    fn test_fallback_source_file() {
        let root = TempDir::new().unwrap();
        let dir = component(
            root.path(),
            "Tabs",
            &[
                ("Tabs.spec.tsx", "interface TabsProps { wrong: string; }"),
                ("TabsImpl.tsx", "interface TabsProps { items: TabItem[]; }"),
            ],
        );

        let info = analyze(&dir).unwrap();
        assert_eq!(info.category, Category::Navigation);
        assert_eq!(info.props.len(), 1);
        assert_eq!(info.props[0].name, "items");
    }

    #[test]
    fn test_unreadable_source_yields_nothing() {
        let root = TempDir::new().unwrap();
        let dir = component(root.path(), "Badge", &[]);
        fs::write(dir.join("Badge.tsx"), b"\xff\xfe\x00\xc3").unwrap();
        assert!(analyze(&dir).is_none());
    }

    #[test]
    fn test_unreadable_examples_yield_empty_lists() {
        let root = TempDir::new().unwrap();
        let dir = component(
            root.path(),
            "Badge",
            &[("Badge.tsx", "interface BadgeProps { count: number; }")],
        );
        fs::write(dir.join("Badge.examples.md"), b"\xff\xfe\x00").unwrap();

        let info = analyze(&dir).unwrap();
        assert_eq!(info.props.len(), 1);
        assert!(info.accessibility_notes.is_empty());
        assert!(info.examples.is_empty());
    }

    #[test]
    fn test_custom_options() {
        let root = TempDir::new().unwrap();
        let dir = component(root.path(), "Card", &[("Card.tsx", "")]);
        let options = AnalyzeOptions {
            storybook_base: "https://ui.example.com/#".into(),
            package: "@acme/ui".into(),
            ..Default::default()
        };
        let table = CategoryTable::default().with_component("Card", Category::DataDisplay);

        let info = analyze_component(&dir, &table, &options).unwrap();
        assert_eq!(info.import_statement, "import { Card } from '@acme/ui'");
        assert_eq!(
            info.storybook_url,
            "https://ui.example.com/#/Components/Data%20Display?id=card"
        );
    }
}
