//! Output generation for compdoc.
//!
//! Renders one markdown document per category and a JSON summary of the
//! whole catalog, and writes them under the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::categories::Category;
use crate::model::{Catalog, ComponentInfo};

/// Errors that can occur while rendering or writing output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Subdirectory of the output directory holding per-category markdown.
pub const COMPONENTS_DIR: &str = "components";
/// File name of the JSON summary.
pub const SUMMARY_FILE: &str = "components-summary.json";

const MAX_PROPS_SHOWN: usize = 10;
const MAX_NOTES_SHOWN: usize = 5;
const MAX_EXAMPLE_CHARS_SHOWN: usize = 300;

// ============================================================================
// Markdown
// ============================================================================

/// Render the markdown document for one category.
///
/// Components are sorted by name; everything else keeps extraction order.
pub fn render_category_markdown(category: Category, components: &[ComponentInfo]) -> String {
    let mut lines = vec![format!("# {} Components\n", category.title())];

    let mut sorted: Vec<&ComponentInfo> = components.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    for component in sorted {
        render_component(&mut lines, component);
    }

    lines.join("\n")
}

fn render_component(lines: &mut Vec<String>, component: &ComponentInfo) {
    lines.push(format!("## {}\n", component.name));
    lines.push(format!("**Import:** `{}`\n", component.import_statement));
    lines.push(format!("**Storybook:** {}\n", component.storybook_url));

    if !component.props.is_empty() {
        lines.push("\n**Key Props:**".to_string());
        for prop in component.props.iter().take(MAX_PROPS_SHOWN) {
            let required = if prop.required { " (required)" } else { "" };
            lines.push(format!("- `{}`: {}{}", prop.name, prop.ty, required));
        }
    }

    if !component.accessibility_notes.is_empty() {
        lines.push("\n**Accessibility:**".to_string());
        for note in component.accessibility_notes.iter().take(MAX_NOTES_SHOWN) {
            lines.push(format!("- {}", note));
        }
    }

    if let Some(example) = component.examples.first() {
        lines.push("\n**Example:**".to_string());
        lines.push("```jsx".to_string());
        lines.push(example.chars().take(MAX_EXAMPLE_CHARS_SHOWN).collect());
        lines.push("```".to_string());
    }

    lines.push(String::new());
}

// ============================================================================
// JSON summary
// ============================================================================

#[derive(Serialize)]
struct Summary<'a> {
    version: &'a str,
    categories: &'a Catalog,
}

/// Render the pretty-printed JSON summary.
///
/// Categories and the components inside them keep catalog (encounter) order.
pub fn render_summary_json(catalog: &Catalog, version: &str) -> Result<String, OutputError> {
    let summary = Summary {
        version,
        categories: catalog,
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

// ============================================================================
// Writing
// ============================================================================

fn write_file(path: &Path, contents: &str) -> Result<(), OutputError> {
    fs::write(path, contents).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Create `<out>` and `<out>/components`, returning the latter.
pub fn prepare_output_dir(out: &Path) -> Result<PathBuf, OutputError> {
    let components_dir = out.join(COMPONENTS_DIR);
    fs::create_dir_all(&components_dir).map_err(|source| OutputError::Io {
        path: components_dir.clone(),
        source,
    })?;
    Ok(components_dir)
}

/// Write `<out>/components/<category>.md` and return its path.
pub fn write_category_markdown(
    out: &Path,
    category: Category,
    components: &[ComponentInfo],
) -> Result<PathBuf, OutputError> {
    let path = out
        .join(COMPONENTS_DIR)
        .join(format!("{}.md", category.as_str()));
    write_file(&path, &render_category_markdown(category, components))?;
    Ok(path)
}

/// Write `<out>/components-summary.json` and return its path.
pub fn write_summary(out: &Path, catalog: &Catalog, version: &str) -> Result<PathBuf, OutputError> {
    let path = out.join(SUMMARY_FILE);
    write_file(&path, &render_summary_json(catalog, version)?)?;
    Ok(path)
}
