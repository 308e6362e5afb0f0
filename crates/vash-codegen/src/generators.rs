//! Generation rules, one per node kind.
//!
//! `content` is true when the node's parent is a content container
//! ([`NodeKind::is_content`]); only then does a node produce buffer appends.
//! Otherwise its fragment is raw program code.

use crate::buffer::{push_expression, push_literal};
use crate::escape::escape_markup_content;
use crate::node::{Node, NodeKind, TagName};
use crate::walker::Generator;

impl<'a> Generator<'a> {
    pub(crate) fn emit_program(&mut self, body: &[Node]) -> String {
        self.generate_children(body, NodeKind::Program)
    }

    pub(crate) fn emit_explicit_expression(&mut self, values: &[Node], content: bool) -> String {
        let inner = self.generate_children(values, NodeKind::ExplicitExpression);
        let wrapped = format!("({})", self.maybe_html_escape(inner, content));
        if content {
            push_expression(&wrapped)
        } else {
            wrapped
        }
    }

    pub(crate) fn emit_expression(&mut self, values: &[Node], content: bool) -> String {
        let inner = self.generate_children(values, NodeKind::Expression);
        if content {
            push_expression(&self.maybe_html_escape(inner, content))
        } else {
            inner
        }
    }

    pub(crate) fn emit_markup(
        &mut self,
        name: &TagName,
        attributes: &[Node],
        values: &[Node],
        is_void: bool,
        void_closed: bool,
    ) -> String {
        let name = self.emit_tag_name(name);

        let mut out = push_literal("<");
        out.push_str(&name);
        if !attributes.is_empty() {
            out.push_str(&push_literal(" "));
        }
        let separator = push_literal(" ");
        for (i, attr) in attributes.iter().enumerate() {
            if i > 0 {
                out.push_str(&separator);
            }
            out.push_str(&self.generate(attr, Some(NodeKind::Markup)));
        }

        if is_void {
            out.push_str(&push_literal(if void_closed { "/>" } else { ">" }));
        } else {
            out.push_str(&push_literal(">"));
            out.push_str(&self.generate_children(values, NodeKind::Markup));
            out.push_str(&push_literal("</"));
            out.push_str(&name);
            out.push_str(&push_literal(">"));
        }
        out
    }

    /// A dynamic name is generated as content of the element, so it is
    /// buffered (and escaped) like any other interpolation.
    fn emit_tag_name(&mut self, name: &TagName) -> String {
        match name {
            TagName::Literal(name) => push_literal(&escape_markup_content(name)),
            TagName::Dynamic { values } => self.generate_children(values, NodeKind::Markup),
        }
    }

    pub(crate) fn emit_markup_attribute(
        &mut self,
        left: &[Node],
        right: &[Node],
        quote: Option<char>,
    ) -> String {
        let mut out = self.generate_children(left, NodeKind::MarkupAttribute);
        if right.is_empty() && quote.is_none() {
            return out;
        }

        let quote = quote
            .map(|q| escape_markup_content(&q.to_string()))
            .unwrap_or_default();
        out.push_str(&push_literal(&format!("={}", quote)));
        out.push_str(&self.generate_children(right, NodeKind::MarkupAttribute));
        if !quote.is_empty() {
            out.push_str(&push_literal(&quote));
        }
        out
    }

    /// Braces are program structure, not output.
    pub(crate) fn emit_block(&mut self, head: &[Node], values: &[Node], tail: &[Node]) -> String {
        let mut out = self.generate_children(head, NodeKind::Block);
        out.push('{');
        out.push_str(&self.generate_children(values, NodeKind::Block));
        out.push('}');
        out.push_str(&self.generate_children(tail, NodeKind::Block));
        out
    }

    pub(crate) fn emit_index_expression(&mut self, values: &[Node]) -> String {
        let inner = self.generate_children(values, NodeKind::IndexExpression);
        format!("[{}]", inner)
    }

    pub(crate) fn emit_text(&mut self, value: &str, content: bool) -> String {
        if content {
            push_literal(&escape_markup_content(value))
        } else {
            value.to_string()
        }
    }

    fn maybe_html_escape(&self, expr: String, content: bool) -> String {
        if content && self.options.html_escape {
            format!(
                "{}.escape({}).toHtmlString()",
                self.options.helpers_name, expr
            )
        } else {
            expr
        }
    }
}
