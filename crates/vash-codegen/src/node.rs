//! Template syntax tree consumed by the generator.
//!
//! The tree is produced by the template parser. It is a closed sum type: every
//! node kind has exactly one generation rule, and the walker matches on it
//! exhaustively.
//!
//! Nodes do not store a parent link. The walker passes the parent's
//! [`NodeKind`] down to each child instead (see [`crate::walker`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::CodegenError;

/// Discriminant of a [`Node`], also used as the parent context of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "VashProgram")]
    Program,
    #[serde(rename = "VashExplicitExpression")]
    ExplicitExpression,
    #[serde(rename = "VashExpression")]
    Expression,
    #[serde(rename = "VashMarkup")]
    Markup,
    #[serde(rename = "VashMarkupAttribute")]
    MarkupAttribute,
    #[serde(rename = "VashBlock")]
    Block,
    #[serde(rename = "VashIndexExpression")]
    IndexExpression,
    #[serde(rename = "VashText")]
    Text,
}

impl NodeKind {
    /// All kinds, in declaration order.
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Program,
        NodeKind::ExplicitExpression,
        NodeKind::Expression,
        NodeKind::Markup,
        NodeKind::MarkupAttribute,
        NodeKind::Block,
        NodeKind::IndexExpression,
        NodeKind::Text,
    ];

    /// The tag used for this kind in the parser's JSON output.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Program => "VashProgram",
            NodeKind::ExplicitExpression => "VashExplicitExpression",
            NodeKind::Expression => "VashExpression",
            NodeKind::Markup => "VashMarkup",
            NodeKind::MarkupAttribute => "VashMarkupAttribute",
            NodeKind::Block => "VashBlock",
            NodeKind::IndexExpression => "VashIndexExpression",
            NodeKind::Text => "VashText",
        }
    }

    pub fn from_tag(tag: &str) -> Option<NodeKind> {
        NodeKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Whether children of a node of this kind produce rendered output
    /// rather than generated program code.
    ///
    /// Only `Program`, `Markup` and `MarkupAttribute` are content containers.
    pub fn is_content(self) -> bool {
        matches!(
            self,
            NodeKind::Program | NodeKind::Markup | NodeKind::MarkupAttribute
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Name of a markup element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagName {
    /// `<div>`
    Literal(String),
    /// `<@tagName>`: the name is computed by an expression.
    Dynamic { values: Vec<Node> },
}

/// A node of the template syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "VashProgram")]
    Program { body: Vec<Node> },

    /// `@(expr)`
    #[serde(rename = "VashExplicitExpression")]
    ExplicitExpression { values: Vec<Node> },

    /// `@expr`
    #[serde(rename = "VashExpression")]
    Expression { values: Vec<Node> },

    #[serde(rename = "VashMarkup", rename_all = "camelCase")]
    Markup {
        name: TagName,
        #[serde(default)]
        attributes: Vec<Node>,
        #[serde(default)]
        values: Vec<Node>,
        #[serde(default)]
        is_void: bool,
        #[serde(default)]
        void_closed: bool,
    },

    #[serde(rename = "VashMarkupAttribute", rename_all = "camelCase")]
    MarkupAttribute {
        left: Vec<Node>,
        #[serde(default)]
        right: Vec<Node>,
        #[serde(default, deserialize_with = "deserialize_quote")]
        right_is_quoted: Option<char>,
    },

    /// A control construct such as `if (cond) { ... } else { ... }`.
    #[serde(rename = "VashBlock")]
    Block {
        #[serde(default)]
        head: Vec<Node>,
        #[serde(default)]
        values: Vec<Node>,
        #[serde(default)]
        tail: Vec<Node>,
    },

    /// `[index]` inside an expression.
    #[serde(rename = "VashIndexExpression")]
    IndexExpression { values: Vec<Node> },

    #[serde(rename = "VashText")]
    Text { value: String },
}

/// The parser writes `rightIsQuoted` as the quote string, or `false` when the
/// attribute value is bare.
fn deserialize_quote<'de, D>(deserializer: D) -> Result<Option<char>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum QuoteOrFlag {
        Flag(bool),
        Quote(String),
    }

    match Option::<QuoteOrFlag>::deserialize(deserializer)? {
        None | Some(QuoteOrFlag::Flag(false)) => Ok(None),
        Some(QuoteOrFlag::Flag(true)) => Ok(Some('"')),
        Some(QuoteOrFlag::Quote(s)) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (None, _) => Ok(None),
                (Some(q @ ('"' | '\'')), None) => Ok(Some(q)),
                _ => Err(Error::custom(format!(
                    "invalid attribute quote: '{}'. Expected '\"' or \"'\"",
                    s
                ))),
            }
        }
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program { .. } => NodeKind::Program,
            Node::ExplicitExpression { .. } => NodeKind::ExplicitExpression,
            Node::Expression { .. } => NodeKind::Expression,
            Node::Markup { .. } => NodeKind::Markup,
            Node::MarkupAttribute { .. } => NodeKind::MarkupAttribute,
            Node::Block { .. } => NodeKind::Block,
            Node::IndexExpression { .. } => NodeKind::IndexExpression,
            Node::Text { .. } => NodeKind::Text,
        }
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn program(body: Vec<Node>) -> Self {
        Node::Program { body }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    pub fn expr(values: Vec<Node>) -> Self {
        Node::Expression { values }
    }

    pub fn explicit_expr(values: Vec<Node>) -> Self {
        Node::ExplicitExpression { values }
    }

    pub fn index(values: Vec<Node>) -> Self {
        Node::IndexExpression { values }
    }

    pub fn block(head: Vec<Node>, values: Vec<Node>, tail: Vec<Node>) -> Self {
        Node::Block { head, values, tail }
    }

    /// Element with children: `<name ...>values</name>`.
    pub fn markup(name: impl Into<String>, attributes: Vec<Node>, values: Vec<Node>) -> Self {
        Node::Markup {
            name: TagName::Literal(name.into()),
            attributes,
            values,
            is_void: false,
            void_closed: false,
        }
    }

    /// Void element: `<name ...>` or `<name .../>` when `closed`.
    pub fn void_markup(name: impl Into<String>, attributes: Vec<Node>, closed: bool) -> Self {
        Node::Markup {
            name: TagName::Literal(name.into()),
            attributes,
            values: Vec::new(),
            is_void: true,
            void_closed: closed,
        }
    }

    pub fn attribute(left: Vec<Node>, right: Vec<Node>, quote: Option<char>) -> Self {
        Node::MarkupAttribute {
            left,
            right,
            right_is_quoted: quote,
        }
    }

    // =========================================================================
    // JSON interchange
    // =========================================================================

    /// Decode a tree from the parser's JSON output.
    pub fn from_json_str(json: &str) -> Result<Self, CodegenError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| CodegenError::MalformedTree(e.to_string()))?;
        Self::from_json_value(value)
    }

    /// Decode a tree from an already-parsed JSON value.
    ///
    /// Every `type` tag in the tree is checked first so an unrecognized kind
    /// surfaces as [`CodegenError::UnknownNodeKind`] instead of a generic
    /// decode failure. A markup node's `expression` (the parser's form of a
    /// computed tag name) becomes [`TagName::Dynamic`].
    pub fn from_json_value(mut value: Value) -> Result<Self, CodegenError> {
        prepare_nodes(&mut value)?;
        serde_json::from_value(value).map_err(|e| CodegenError::MalformedTree(e.to_string()))
    }
}

fn prepare_nodes(value: &mut Value) -> Result<(), CodegenError> {
    match value {
        Value::Object(map) => {
            let kind = match map.get("type") {
                None => None,
                Some(Value::String(tag)) => Some(
                    NodeKind::from_tag(tag)
                        .ok_or_else(|| CodegenError::UnknownNodeKind(tag.clone()))?,
                ),
                Some(tag) => {
                    return Err(CodegenError::MalformedTree(format!(
                        "node type must be a string, found {}",
                        tag
                    )));
                }
            };
            if kind == Some(NodeKind::Markup) {
                fold_tag_expression(map)?;
            }
            map.values_mut().try_for_each(prepare_nodes)
        }
        Value::Array(items) => items.iter_mut().try_for_each(prepare_nodes),
        _ => Ok(()),
    }
}

/// `<@tag>` arrives as an `expression` node beside the (empty) `name`. The
/// node itself becomes the name, so it is generated as element content.
fn fold_tag_expression(markup: &mut Map<String, Value>) -> Result<(), CodegenError> {
    let expression = match markup.remove("expression") {
        None | Some(Value::Null) => return Ok(()),
        Some(expression @ Value::Object(_)) => expression,
        Some(other) => {
            return Err(CodegenError::MalformedTree(format!(
                "markup tag expression must be a node, found {}",
                other
            )));
        }
    };
    markup.insert("name".to_string(), json!({ "values": [expression] }));
    Ok(())
}
