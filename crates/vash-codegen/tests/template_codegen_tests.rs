//! Integration tests: parser JSON in, render source out.

use vash_codegen::{
    CodegenError, CodegenOptions, GenerateJob, Node, NoopTrace, TraceEvent, TracePhase,
    TracingSink, generate, generate_parallel, generate_with_trace,
};

/// `<ul>@model.items.forEach(function(item){<li>@item</li>})</ul>`
const LIST_TREE: &str = r#"{
    "type": "VashProgram",
    "body": [
        {
            "type": "VashMarkup",
            "name": "ul",
            "attributes": [],
            "values": [
                {
                    "type": "VashBlock",
                    "head": [{ "type": "VashText", "value": "model.items.forEach(function(item)" }],
                    "values": [
                        {
                            "type": "VashMarkup",
                            "name": "li",
                            "attributes": [],
                            "values": [
                                { "type": "VashExpression", "values": [{ "type": "VashText", "value": "item" }] }
                            ],
                            "isVoid": false,
                            "voidClosed": false
                        }
                    ],
                    "tail": [{ "type": "VashText", "value": ")" }]
                }
            ],
            "isVoid": false,
            "voidClosed": false
        }
    ]
}"#;

#[test]
fn test_list_template_body() {
    let tree = Node::from_json_str(LIST_TREE).unwrap();
    let options = CodegenOptions::default().with_simple(true);
    let code = generate(&tree, &options).unwrap();

    let expected_body = "__vbuffer.push('<ul>');\n\
                         model.items.forEach(function(item){\n\
                         __vbuffer.push('<li>');\n\
                         __vbuffer.push(html.escape(item).toHtmlString());\n\
                         __vbuffer.push('</li>');\n\
                         })\n\
                         __vbuffer.push('</ul>');\n";
    assert!(
        code.contains(expected_body),
        "unexpected body in generated code:\n{}",
        code
    );
    assert!(code.ends_with("return html.buffer.join(\"\"); \n"));
}

#[test]
fn test_buffer_appends_are_only_emitted_for_content() {
    let tree = Node::from_json_str(LIST_TREE).unwrap();
    let code = generate(&tree, &CodegenOptions::default().with_as_helper(true)).unwrap();

    // The block head and its braces are program code.
    assert!(!code.contains("push('model.items"));
    assert!(!code.contains("push('{"));
    assert!(!code.contains("push(')"));
    assert!(code.contains("model.items.forEach(function(item){"));
}

#[test]
fn test_unknown_kind_aborts_before_generation() {
    let json = r#"{ "type": "VashProgram", "body": [{ "type": "VashSomethingNew" }] }"#;
    assert_eq!(
        Node::from_json_str(json),
        Err(CodegenError::UnknownNodeKind("VashSomethingNew".to_string()))
    );
}

#[test]
fn test_trace_visits_every_node_depth_first() {
    let tree = Node::from_json_str(LIST_TREE).unwrap();
    let mut events: Vec<TraceEvent> = Vec::new();
    generate_with_trace(&tree, &CodegenOptions::default(), &mut events).unwrap();

    let entered: Vec<String> = events
        .iter()
        .filter(|e| e.phase == TracePhase::Enter)
        .map(|e| e.kind.to_string())
        .collect();
    assert_eq!(
        entered,
        vec![
            "VashProgram",
            "VashMarkup",
            "VashBlock",
            "VashText",
            "VashMarkup",
            "VashExpression",
            "VashText",
            "VashText",
        ]
    );
    let leaves = events.iter().filter(|e| e.phase == TracePhase::Leave).count();
    assert_eq!(leaves, entered.len());
    assert_eq!(events.last().map(|e| e.depth), Some(0));
}

#[test]
fn test_output_does_not_depend_on_the_trace_sink() {
    let tree = Node::from_json_str(LIST_TREE).unwrap();
    let options = CodegenOptions::default();
    let logged = generate(&tree, &options).unwrap();

    let mut events: Vec<TraceEvent> = Vec::new();
    assert_eq!(generate_with_trace(&tree, &options, &mut events).unwrap(), logged);
    assert_eq!(generate_with_trace(&tree, &options, &mut NoopTrace).unwrap(), logged);
    assert_eq!(generate_with_trace(&tree, &options, &mut TracingSink).unwrap(), logged);
    assert_eq!(events.len(), 16);
}

#[test]
fn test_generation_does_not_change_the_tree() {
    let tree = Node::from_json_str(LIST_TREE).unwrap();
    let before = tree.clone();
    let first = generate(&tree, &CodegenOptions::default()).unwrap();
    let second = generate(&tree, &CodegenOptions::default()).unwrap();
    assert_eq!(tree, before);
    assert_eq!(first, second);
}

#[test]
fn test_parallel_generation_matches_sequential() {
    let list = Node::from_json_str(LIST_TREE).unwrap();
    let hello = Node::program(vec![Node::text("hello")]);
    let standalone = CodegenOptions::default();
    let helper = CodegenOptions::default().with_as_helper(true);
    let broken = CodegenOptions::default().with_model_name("not valid");

    let jobs = [
        GenerateJob { root: &list, options: &standalone },
        GenerateJob { root: &hello, options: &helper },
        GenerateJob { root: &hello, options: &broken },
        GenerateJob { root: &list, options: &helper },
    ];
    let results = generate_parallel(&jobs);

    assert_eq!(results.len(), jobs.len());
    for (job, result) in jobs.iter().zip(&results) {
        assert_eq!(result, &generate(job.root, job.options));
    }
    assert!(results[2].is_err());
}
