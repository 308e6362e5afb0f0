use super::*;

fn body(node: &Node, options: &CodegenOptions) -> String {
    Generator::new(options, &mut NoopTrace).generate_root(node)
}

fn unescaped() -> CodegenOptions {
    CodegenOptions::default().with_html_escape(false)
}

// =========================================================================
// Content-bearing context
// =========================================================================

#[test]
fn test_text_under_program_is_buffered() {
    let tree = Node::program(vec![Node::text("a")]);
    assert_eq!(body(&tree, &unescaped()), "\n__vbuffer.push('a');\n");
}

#[test]
fn test_text_at_root_is_raw() {
    assert_eq!(body(&Node::text("it's"), &unescaped()), "it's");
}

#[test]
fn test_text_inside_block_is_raw_code() {
    let tree = Node::block(
        vec![Node::text("if (model.ok) ")],
        vec![Node::text("x = 1;")],
        vec![Node::text(" // end")],
    );
    assert_eq!(body(&tree, &unescaped()), "if (model.ok) {x = 1;} // end");
}

#[test]
fn test_markup_inside_block_buffers_its_children() {
    let tree = Node::program(vec![Node::block(
        vec![Node::text("if (model.ok) ")],
        vec![Node::markup("p", vec![], vec![Node::text("yes")])],
        vec![],
    )]);
    let out = condense(&body(&tree, &unescaped()));
    assert_eq!(out, "if (model.ok) {\n__vbuffer.push('<p>yes</p>');\n}");
}

#[test]
fn test_expression_under_explicit_expression_is_raw() {
    let tree = Node::program(vec![Node::explicit_expr(vec![Node::expr(vec![
        Node::text("x"),
    ])])]);
    assert_eq!(
        body(&tree, &CodegenOptions::default()),
        "\n__vbuffer.push((html.escape(x).toHtmlString()));\n"
    );
}

#[test]
fn test_index_expression_is_raw_subscript() {
    let tree = Node::program(vec![Node::expr(vec![
        Node::text("model.items"),
        Node::index(vec![Node::text("0")]),
    ])]);
    assert_eq!(
        body(&tree, &unescaped()),
        "\n__vbuffer.push(model.items[0]);\n"
    );
}

// =========================================================================
// Escaping policy
// =========================================================================

#[test]
fn test_expression_escaped_when_html_escape_set() {
    let tree = Node::program(vec![Node::expr(vec![Node::text("model.x")])]);
    assert_eq!(
        body(&tree, &CodegenOptions::default()),
        "\n__vbuffer.push(html.escape(model.x).toHtmlString());\n"
    );
}

#[test]
fn test_expression_not_escaped_when_html_escape_unset() {
    let tree = Node::program(vec![Node::expr(vec![Node::text("model.x")])]);
    assert_eq!(body(&tree, &unescaped()), "\n__vbuffer.push(model.x);\n");
}

#[test]
fn test_escape_uses_configured_helpers_name() {
    let tree = Node::program(vec![Node::expr(vec![Node::text("it.x")])]);
    let options = CodegenOptions::default().with_helpers_name("h");
    assert_eq!(
        body(&tree, &options),
        "\n__vbuffer.push(h.escape(it.x).toHtmlString());\n"
    );
}

#[test]
fn test_explicit_expression_parenthesized() {
    let tree = Node::program(vec![Node::explicit_expr(vec![Node::text("a + b")])]);
    assert_eq!(
        body(&tree, &CodegenOptions::default()),
        "\n__vbuffer.push((html.escape(a + b).toHtmlString()));\n"
    );
    assert_eq!(body(&tree, &unescaped()), "\n__vbuffer.push((a + b));\n");
}

#[test]
fn test_explicit_expression_at_root_is_not_buffered() {
    let tree = Node::explicit_expr(vec![Node::text("a + b")]);
    assert_eq!(body(&tree, &CodegenOptions::default()), "(a + b)");
}

#[test]
fn test_text_literal_is_escaped_for_single_quotes() {
    let tree = Node::program(vec![Node::text("it's\nfine")]);
    assert_eq!(
        body(&tree, &unescaped()),
        "\n__vbuffer.push('it\\'s\\nfine');\n"
    );
}

// =========================================================================
// Order
// =========================================================================

#[test]
fn test_appends_follow_source_order() {
    let tree = Node::program(vec![
        Node::text("a"),
        Node::expr(vec![Node::text("x")]),
        Node::text("b"),
    ]);
    assert_eq!(
        body(&tree, &unescaped()),
        "\n__vbuffer.push('a');\n\n__vbuffer.push(x);\n\n__vbuffer.push('b');\n"
    );
}

// =========================================================================
// Markup
// =========================================================================

#[test]
fn test_void_closed_markup_shape() {
    let tree = Node::void_markup("br", vec![], true);
    assert_eq!(
        body(&tree, &unescaped()),
        "\n__vbuffer.push('<');\n\n__vbuffer.push('br');\n\n__vbuffer.push('/>');\n"
    );
}

#[test]
fn test_void_open_markup() {
    let tree = Node::program(vec![Node::void_markup("br", vec![], false)]);
    assert_eq!(
        condense(&body(&tree, &unescaped())),
        "\n__vbuffer.push('<br>');\n"
    );
}

#[test]
fn test_markup_with_quoted_attribute_and_children() {
    let tree = Node::program(vec![Node::markup(
        "div",
        vec![Node::attribute(
            vec![Node::text("class")],
            vec![Node::text("box")],
            Some('"'),
        )],
        vec![Node::text("hi")],
    )]);
    assert_eq!(
        condense(&body(&tree, &unescaped())),
        "\n__vbuffer.push('<div class=\"box\">hi</div>');\n"
    );
}

#[test]
fn test_single_quoted_attribute_quote_is_escaped() {
    let tree = Node::void_markup(
        "img",
        vec![Node::attribute(
            vec![Node::text("alt")],
            vec![Node::text("x")],
            Some('\''),
        )],
        false,
    );
    assert_eq!(
        condense(&body(&tree, &unescaped())),
        "\n__vbuffer.push('<img alt=\\'x\\'>');\n"
    );
}

#[test]
fn test_attributes_joined_by_spaces() {
    let tree = Node::void_markup(
        "input",
        vec![
            Node::attribute(vec![Node::text("type")], vec![Node::text("text")], Some('"')),
            Node::attribute(vec![Node::text("disabled")], vec![], None),
        ],
        false,
    );
    assert_eq!(
        condense(&body(&tree, &unescaped())),
        "\n__vbuffer.push('<input type=\"text\" disabled>');\n"
    );
}

#[test]
fn test_attribute_value_expression_is_buffered() {
    let tree = Node::markup(
        "a",
        vec![Node::attribute(
            vec![Node::text("href")],
            vec![Node::expr(vec![Node::text("model.url")])],
            Some('"'),
        )],
        vec![],
    );
    let out = condense(&body(&tree, &CodegenOptions::default()));
    assert_eq!(
        out,
        "\n__vbuffer.push('<a href=\"');\n\
         __vbuffer.push(html.escape(model.url).toHtmlString());\n\
         __vbuffer.push('\"></a>');\n"
    );
}

#[test]
fn test_attribute_without_value_emits_only_name() {
    let tree = Node::attribute(vec![Node::text("disabled")], vec![], None);
    let out = body(&tree, &unescaped());
    assert_eq!(out, "\n__vbuffer.push('disabled');\n");
    assert!(!out.contains('='));
}

#[test]
fn test_attribute_with_empty_quoted_value() {
    let tree = Node::attribute(vec![Node::text("value")], vec![], Some('"'));
    assert_eq!(
        condense(&body(&tree, &unescaped())),
        "\n__vbuffer.push('value=\"\"');\n"
    );
}

#[test]
fn test_dynamic_tag_name() {
    let tree = Node::Markup {
        name: TagName::Dynamic {
            values: vec![Node::expr(vec![Node::text("model.tag")])],
        },
        attributes: vec![],
        values: vec![Node::text("x")],
        is_void: false,
        void_closed: false,
    };
    let out = condense(&body(&tree, &unescaped()));
    assert_eq!(
        out,
        "\n__vbuffer.push('<');\n\
         __vbuffer.push(model.tag);\n\
         __vbuffer.push('>x</');\n\
         __vbuffer.push(model.tag);\n\
         __vbuffer.push('>');\n"
    );
}

// =========================================================================
// Tracing
// =========================================================================

#[test]
fn test_trace_events_bracket_each_node() {
    let tree = Node::program(vec![Node::text("a")]);
    let options = CodegenOptions::default();
    let mut events: Vec<TraceEvent> = Vec::new();
    Generator::new(&options, &mut events).generate_root(&tree);

    let expected = [
        (TracePhase::Enter, NodeKind::Program, 0),
        (TracePhase::Enter, NodeKind::Text, 1),
        (TracePhase::Leave, NodeKind::Text, 1),
        (TracePhase::Leave, NodeKind::Program, 0),
    ];
    assert_eq!(events.len(), expected.len());
    for (event, (phase, kind, depth)) in events.iter().zip(expected) {
        assert_eq!(event.phase, phase);
        assert_eq!(event.kind, kind);
        assert_eq!(event.depth, depth);
    }
    assert_eq!(events[1].to_string(), "  Entering VashText");
}
