use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the vashc binary.
#[derive(Parser, Debug)]
#[command(
    name = "vashc",
    version,
    about = "Generate render-function source from vash template syntax trees"
)]
pub struct CliArgs {
    // ==================== Input / Output ====================
    /// Syntax tree files (JSON from the template parser). Reads stdin when empty.
    pub inputs: Vec<PathBuf>,

    /// Write generated source to this file instead of stdout.
    #[arg(short = 'o', long = "out", conflicts_with = "out_dir")]
    pub out: Option<PathBuf>,

    /// Write one `<name>.js` per input into this directory.
    #[arg(long = "outDir", alias = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// JSON file with generation options (`useWith`, `helpersName`, ...).
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    // ==================== Generation Options ====================
    /// Wrap output in try/catch reporting errors against the template source.
    #[arg(long)]
    pub debug: bool,

    /// Original template file, embedded in debug error reports.
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Resolve bare identifiers against the model with a `with` block.
    #[arg(long = "useWith", alias = "use-with")]
    pub use_with: bool,

    /// Emit a helper body instead of a standalone render function.
    #[arg(long = "asHelper", alias = "as-helper")]
    pub as_helper: bool,

    /// Return the joined buffer instead of calling render-end hooks.
    #[arg(long)]
    pub simple: bool,

    /// Do not HTML-escape interpolated expressions.
    #[arg(long = "noHtmlEscape", alias = "no-html-escape")]
    pub no_html_escape: bool,

    /// Identifier of the runtime helpers object in generated code.
    #[arg(long = "helpersName", alias = "helpers-name")]
    pub helpers_name: Option<String>,

    /// Identifier of the data model in generated code.
    #[arg(long = "modelName", alias = "model-name")]
    pub model_name: Option<String>,

    // ==================== Diagnostics ====================
    /// Print the node enter/leave trail of each pass to stderr.
    #[arg(long)]
    pub trace: bool,
}
