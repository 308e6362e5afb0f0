//! Code generation backend for vash templates.
//!
//! Takes a parsed template tree and produces JavaScript source for a render
//! function. Nothing here runs the template; the output is compiled and
//! executed by the host against a model and a runtime helpers object.
//!
//! - [`node`]: the syntax tree and its JSON interchange form
//! - [`walker`] / [`generators`]: the depth-first walk and per-kind rules
//! - [`skeleton`]: head/tail text for standalone and helper output
//! - [`condense()`]: merging of adjacent literal buffer pushes
//! - [`escape`] / [`buffer`]: string escaping and buffer-append statements
//! - [`parallel`]: generating many templates on the rayon pool
//!
//! ```
//! use vash_codegen::{CodegenOptions, Node, generate};
//!
//! let tree = Node::program(vec![
//!     Node::text("Hello, "),
//!     Node::expr(vec![Node::text("model.name")]),
//! ]);
//! let code = generate(&tree, &CodegenOptions::default()).unwrap();
//! assert!(code.contains("__vbuffer.push('Hello, ');"));
//! assert!(code.contains("__vbuffer.push(html.escape(model.name).toHtmlString());"));
//! ```

pub mod buffer;
pub mod condense;
pub mod error;
pub mod escape;
pub mod generators;
pub mod node;
pub mod options;
pub mod parallel;
pub mod skeleton;
pub mod trace;
pub mod walker;

pub use condense::condense;
pub use error::CodegenError;
pub use node::{Node, NodeKind, TagName};
pub use options::CodegenOptions;
pub use parallel::{GenerateJob, generate_parallel};
pub use trace::{NoopTrace, TraceEvent, TracePhase, TraceSink, TracingSink};
pub use walker::Generator;

/// Generate render-function source for `root`.
///
/// Node visits are logged at TRACE level through [`TracingSink`].
pub fn generate(root: &Node, options: &CodegenOptions) -> Result<String, CodegenError> {
    generate_with_trace(root, options, &mut TracingSink)
}

/// Like [`generate`], reporting every node entered and left to `sink`.
pub fn generate_with_trace(
    root: &Node,
    options: &CodegenOptions,
    sink: &mut dyn TraceSink,
) -> Result<String, CodegenError> {
    options.validate()?;

    let body = Generator::new(options, sink).generate_root(root);

    let (head, tail) = if options.as_helper {
        (skeleton::helper_head(options), skeleton::helper_tail(options))
    } else {
        (skeleton::head(options), skeleton::tail(options))
    };

    let mut out = String::with_capacity(head.len() + body.len() + tail.len());
    out.push_str(&head);
    out.push_str(&body);
    out.push_str(&tail);
    let out = condense(&out);

    tracing::debug!(
        as_helper = options.as_helper,
        debug = options.debug,
        len = out.len(),
        "generated render source"
    );
    Ok(out)
}

#[cfg(test)]
#[path = "tests/escape_tests.rs"]
mod escape_tests;
#[cfg(test)]
#[path = "tests/generators_tests.rs"]
mod generators_tests;
#[cfg(test)]
#[path = "tests/condense_tests.rs"]
mod condense_tests;
#[cfg(test)]
#[path = "tests/skeleton_tests.rs"]
mod skeleton_tests;
#[cfg(test)]
#[path = "tests/node_tests.rs"]
mod node_tests;
