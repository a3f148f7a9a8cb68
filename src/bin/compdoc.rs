//! Compdoc CLI - Generate categorized documentation for a UI component library.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use compdoc::builder::{write_docs, Compdoc, UNKNOWN_VERSION};
use compdoc::errors::{exit_code, CompdocError};
use compdoc::logging::init_logger;

const USAGE: &str = "Usage: compdoc <library-path> <output-dir> [version]";

#[derive(Parser)]
#[command(name = "compdoc")]
#[command(about = "Generate categorized documentation for a UI component library")]
#[command(version)]
struct Cli {
    /// Root of the component library checkout
    library_path: PathBuf,

    /// Directory that receives components/*.md and components-summary.json
    output_dir: PathBuf,

    /// Library version recorded in the summary
    #[arg(value_name = "VERSION", default_value = UNKNOWN_VERSION)]
    library_version: String,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true)]
    _extra: Vec<String>,

    /// Storybook base URL for component links
    #[arg(long)]
    storybook_base: Option<String>,

    /// Package named in import statements
    #[arg(long)]
    package: Option<String>,

    /// Components root relative to the library path
    #[arg(long)]
    components_subdir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        println!("Error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> Result<(), CompdocError> {
    let mut compdoc = Compdoc::new(&cli.library_path);
    if let Some(base) = cli.storybook_base {
        compdoc = compdoc.storybook_base(base);
    }
    if let Some(package) = cli.package {
        compdoc = compdoc.package(package);
    }
    if let Some(subdir) = cli.components_subdir {
        compdoc = compdoc.components_subdir(subdir);
    }

    println!("Analyzing component library at: {}", cli.library_path.display());

    let catalog = compdoc.analyze()?;
    let docs = write_docs(&cli.output_dir, &catalog, &cli.library_version, |path| {
        println!("Generated: {}", path.display());
    })?;

    println!("\nAnalysis complete! Total components: {}", docs.total_components);

    Ok(())
}
