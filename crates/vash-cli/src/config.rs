use anyhow::{Context, Result};
use std::path::Path;

use vash_codegen::CodegenOptions;

use crate::args::CliArgs;

/// Load generation options from a JSON file. Missing keys keep their defaults.
pub fn load_options(path: &Path) -> Result<CodegenOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options: {}", path.display()))?;
    parse_options(&text).with_context(|| format!("failed to parse options: {}", path.display()))
}

pub fn parse_options(text: &str) -> Result<CodegenOptions> {
    Ok(serde_json::from_str(text)?)
}

/// Resolve the options for this run: defaults, then the `--config` file, then
/// command-line flags.
pub fn resolve_options(args: &CliArgs) -> Result<CodegenOptions> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => CodegenOptions::default(),
    };
    apply_args(&mut options, args);

    if let Some(path) = &args.source {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read template source: {}", path.display()))?;
        options.source = Some(source);
    }
    Ok(options)
}

/// Flags can only switch options on; `--noHtmlEscape` switches escaping off.
pub fn apply_args(options: &mut CodegenOptions, args: &CliArgs) {
    options.debug |= args.debug;
    options.use_with |= args.use_with;
    options.as_helper |= args.as_helper;
    options.simple |= args.simple;
    if args.no_html_escape {
        options.html_escape = false;
    }
    if let Some(name) = &args.helpers_name {
        options.helpers_name = name.clone();
    }
    if let Some(name) = &args.model_name {
        options.model_name = name.clone();
    }
}
