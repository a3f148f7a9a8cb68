//! Compdoc - Generate categorized documentation for a UI component library.
//!
//! Compdoc walks the component directories of a library checkout, pulls prop
//! interfaces out of `.tsx` sources and accessibility notes and usage
//! snippets out of `*.examples.md` files, and writes one markdown document
//! per category plus a JSON summary.
//!
//! # Quick Start
//!
//! ```no_run
//! use compdoc::builder::Compdoc;
//!
//! let docs = Compdoc::new("./prism-ui")
//!     .generate("./docs", "2.44.0")
//!     .unwrap();
//!
//! println!("Documented {} components", docs.total_components);
//! ```
//!
//! # Modules
//!
//! - [`categories`] - Component and storybook lookup tables
//! - [`model`] - Component records and the categorized catalog
//! - [`props`] - Prop extraction from `<Name>Props` interfaces
//! - [`usage`] - Accessibility notes and `jsx` examples from markdown
//! - [`analyzer`] - Per-directory component analysis
//! - [`walker`] - Component directory discovery
//! - [`output`] - Markdown and JSON rendering and writing
//! - [`builder`] - Fluent API tying it all together
//!
//! Extraction is regex based and best effort: anything it cannot make sense
//! of is skipped rather than reported.

pub mod categories;
pub mod model;
pub mod props;
pub mod usage;
pub mod errors;
pub mod analyzer;
pub mod walker;
pub mod output;
pub mod builder;
pub mod logging;

// Re-export key types at crate root for convenience
pub use analyzer::{analyze_component, AnalyzeOptions};
pub use builder::{Compdoc, GeneratedDocs};
pub use categories::{Category, CategoryTable};
pub use errors::CompdocError;
pub use model::{Catalog, ComponentInfo, ComponentProp};
pub use output::OutputError;
pub use walker::WalkError;
