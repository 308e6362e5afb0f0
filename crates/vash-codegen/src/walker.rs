//! Depth-first walk over the syntax tree.
//!
//! The walker owns the per-pass state: the options, the trace sink and the
//! current depth. Rules (see [`crate::generators`]) call back into
//! [`Generator::generate_children`] for their child sequences, which passes
//! the rule's own kind down as the children's parent context.

use crate::node::{Node, NodeKind};
use crate::options::CodegenOptions;
use crate::trace::{TraceEvent, TracePhase, TraceSink};

pub struct Generator<'a> {
    pub(crate) options: &'a CodegenOptions,
    sink: &'a mut dyn TraceSink,
    depth: usize,
}

impl<'a> Generator<'a> {
    pub fn new(options: &'a CodegenOptions, sink: &'a mut dyn TraceSink) -> Self {
        Self {
            options,
            sink,
            depth: 0,
        }
    }

    /// Generate the body for a root node. The root has no parent, so it is
    /// never treated as content.
    pub fn generate_root(&mut self, root: &Node) -> String {
        self.generate(root, None)
    }

    /// Generate one node given the kind of its parent.
    pub fn generate(&mut self, node: &Node, parent: Option<NodeKind>) -> String {
        let kind = node.kind();
        self.sink.event(TraceEvent {
            phase: TracePhase::Enter,
            kind,
            depth: self.depth,
        });
        self.depth += 1;

        let content = parent.is_some_and(NodeKind::is_content);
        let out = match node {
            Node::Program { body } => self.emit_program(body),
            Node::ExplicitExpression { values } => self.emit_explicit_expression(values, content),
            Node::Expression { values } => self.emit_expression(values, content),
            Node::Markup {
                name,
                attributes,
                values,
                is_void,
                void_closed,
            } => self.emit_markup(name, attributes, values, *is_void, *void_closed),
            Node::MarkupAttribute {
                left,
                right,
                right_is_quoted,
            } => self.emit_markup_attribute(left, right, *right_is_quoted),
            Node::Block { head, values, tail } => self.emit_block(head, values, tail),
            Node::IndexExpression { values } => self.emit_index_expression(values),
            Node::Text { value } => self.emit_text(value, content),
        };

        self.depth -= 1;
        self.sink.event(TraceEvent {
            phase: TracePhase::Leave,
            kind,
            depth: self.depth,
        });
        out
    }

    /// Generate `children` in order under a parent of kind `parent` and
    /// concatenate the fragments.
    pub(crate) fn generate_children(&mut self, children: &[Node], parent: NodeKind) -> String {
        let mut out = String::new();
        for child in children {
            out.push_str(&self.generate(child, Some(parent)));
        }
        out
    }
}
