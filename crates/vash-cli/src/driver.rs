use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::{Path, PathBuf};

use vash_codegen::{
    CodegenOptions, GenerateJob, Node, TraceEvent, generate_parallel, generate_with_trace,
};

use crate::args::CliArgs;
use crate::config::resolve_options;

pub const STDIN_NAME: &str = "<stdin>";

/// A decoded syntax tree and where it came from.
#[derive(Debug)]
pub struct Input {
    pub name: String,
    pub path: Option<PathBuf>,
    pub tree: Node,
}

/// Generated source for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub name: String,
    pub path: Option<PathBuf>,
    pub code: String,
    /// Node enter/leave trail, recorded only with `--trace`.
    pub trace: Vec<TraceEvent>,
}

/// Run one invocation: read inputs, generate, write outputs.
pub fn run(args: &CliArgs) -> Result<Vec<Output>> {
    if args.out.is_some() && args.inputs.len() > 1 {
        bail!("--out accepts a single input; use --outDir for several");
    }

    let options = resolve_options(args)?;
    let inputs = read_inputs(&args.inputs)?;
    let outputs = compile(&inputs, &options, args.trace)?;
    write_outputs(args, &outputs)?;
    Ok(outputs)
}

pub fn read_inputs(paths: &[PathBuf]) -> Result<Vec<Input>> {
    if paths.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read syntax tree from stdin")?;
        let tree = decode(STDIN_NAME, &text)?;
        return Ok(vec![Input {
            name: STDIN_NAME.to_string(),
            path: None,
            tree,
        }]);
    }

    paths
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let name = path.display().to_string();
            let tree = decode(&name, &text)?;
            Ok(Input {
                name,
                path: Some(path.clone()),
                tree,
            })
        })
        .collect()
}

pub fn decode(name: &str, text: &str) -> Result<Node> {
    Node::from_json_str(text).with_context(|| format!("failed to decode syntax tree: {}", name))
}

/// Generate every input. Traced runs are sequential so each trail stays whole;
/// otherwise inputs are generated in parallel.
pub fn compile(inputs: &[Input], options: &CodegenOptions, trace: bool) -> Result<Vec<Output>> {
    tracing::debug!(inputs = inputs.len(), trace, "compiling templates");

    if trace {
        return inputs
            .iter()
            .map(|input| {
                let mut events: Vec<TraceEvent> = Vec::new();
                let code = generate_with_trace(&input.tree, options, &mut events)
                    .with_context(|| format!("failed to generate {}", input.name))?;
                Ok(output_for(input, code, events))
            })
            .collect();
    }

    let jobs: Vec<GenerateJob<'_>> = inputs
        .iter()
        .map(|input| GenerateJob {
            root: &input.tree,
            options,
        })
        .collect();

    inputs
        .iter()
        .zip(generate_parallel(&jobs))
        .map(|(input, result)| {
            let code = result.with_context(|| format!("failed to generate {}", input.name))?;
            Ok(output_for(input, code, Vec::new()))
        })
        .collect()
}

fn output_for(input: &Input, code: String, trace: Vec<TraceEvent>) -> Output {
    Output {
        name: input.name.clone(),
        path: input.path.clone(),
        code,
        trace,
    }
}

pub fn write_outputs(args: &CliArgs, outputs: &[Output]) -> Result<()> {
    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
        for output in outputs {
            let target = dir.join(output_file_name(output));
            write_file(&target, &output.code)?;
        }
        return Ok(());
    }

    if let Some(path) = &args.out {
        if let Some(output) = outputs.first() {
            write_file(path, &output.code)?;
        }
        return Ok(());
    }

    if outputs.len() > 1 {
        bail!("several inputs need --outDir");
    }
    if let Some(output) = outputs.first() {
        print!("{}", output.code);
    }
    Ok(())
}

/// `templates/page.json` becomes `page.js`; stdin becomes `template.js`.
pub fn output_file_name(output: &Output) -> PathBuf {
    let mut name = output
        .path
        .as_deref()
        .and_then(Path::file_stem)
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "template".into());
    name.push(".js");
    PathBuf::from(name)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
