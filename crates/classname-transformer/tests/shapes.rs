//! Rewrite behaviour for every class-value shape.

use classname_transformer::{
    transform, PrefixConfig, SkippedShape, TransformError, TransformOptions, TransformResult,
};
use pretty_assertions::assert_eq;

fn run(source: &str) -> TransformResult {
    transform(source, &PrefixConfig::default(), &TransformOptions::default())
        .expect("source should parse")
}

fn code(source: &str) -> String {
    run(source).code
}

// ============================================================================
// LITERALS
// ============================================================================

#[test]
fn test_attribute_string() {
    assert_eq!(
        code(r#"<div className="btn primary" />"#),
        r#"<div className="app-btn app-primary" />"#
    );
}

#[test]
fn test_attribute_string_single_quotes() {
    assert_eq!(code("<div className='x  y' />"), "<div className='app-x app-y' />");
}

#[test]
fn test_string_in_expression_slot() {
    assert_eq!(
        code(r#"<div className={"btn"} />"#),
        r#"<div className={"app-btn"} />"#
    );
    assert_eq!(
        code("<div className={'a b'} />"),
        "<div className={'app-a app-b'} />"
    );
}

#[test]
fn test_string_with_lone_surrogate_is_left_unchanged() {
    let source = r#"<div className={"x\uD800"} />"#;
    let result = run(source);
    assert_eq!(result.code, source);
    assert_eq!(result.skipped[0].kind, "non-UTF-8 string literal");
}

#[test]
fn test_string_with_control_escape_stays_escaped() {
    assert_eq!(
        code(r#"<div className={"a b\x001"}/>"#),
        r#"<div className={"app-a app-b\x001"}/>"#
    );
}

#[test]
fn test_empty_attribute_string() {
    let result = run(r#"<div className="" />"#);
    assert_eq!(result.code, r#"<div className="" />"#);
    assert!(result.events.is_empty());
}

// ============================================================================
// CONDITIONALS
// ============================================================================

#[test]
fn test_conditional() {
    assert_eq!(
        code(r#"<div className={active ? "on" : "off"} />"#),
        r#"<div className={active ? "app-on" : "app-off"} />"#
    );
}

#[test]
fn test_conditional_test_is_untouched() {
    assert_eq!(
        code(r#"<div className={mode === "dark" ? "night" : "day"} />"#),
        r#"<div className={mode === "dark" ? "app-night" : "app-day"} />"#
    );
}

#[test]
fn test_nested_conditional() {
    assert_eq!(
        code(r#"<div className={a ? (b ? "x" : "y") : "z"} />"#),
        r#"<div className={a ? (b ? "app-x" : "app-y") : "app-z"} />"#
    );
}

#[test]
fn test_conditional_with_opaque_branch() {
    let result = run(r#"<div className={a ? "x" : props.cls} />"#);
    assert_eq!(result.code, r#"<div className={a ? "app-x" : props.cls} />"#);
    assert_eq!(
        result.skipped,
        vec![SkippedShape {
            kind: "member expression",
            line: 1
        }]
    );
}

// ============================================================================
// TEMPLATE LITERALS
// ============================================================================

#[test]
fn test_template_segments_are_prefixed_independently() {
    assert_eq!(
        code(r#"<div className={`base-${active ? "on" : "off"}-x`} />"#),
        r#"<div className={`app-base-${active ? "app-on" : "app-off"}app--x`} />"#
    );
}

#[test]
fn test_template_keeps_separating_spaces() {
    let result = run("<div className={`btn ${size} active`} />");
    assert_eq!(result.code, "<div className={`app-btn ${size} app-active`} />");
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].kind, "identifier");
}

#[test]
fn test_template_without_interpolation() {
    assert_eq!(
        code("<div className={`card  shadow`} />"),
        "<div className={`app-card app-shadow`} />"
    );
}

#[test]
fn test_conditional_two_levels_inside_template() {
    assert_eq!(
        code(r#"<div className={`${a ? (b ? "x" : "y") : "z"}`} />"#),
        r#"<div className={`${a ? (b ? "app-x" : "app-y") : "app-z"}`} />"#
    );
}

#[test]
fn test_join_call_inside_template() {
    assert_eq!(
        code(r#"<div className={`row ${classnames("a", on ? "b" : "c")}`} />"#),
        r#"<div className={`app-row ${classnames("app-a", on ? "app-b" : "app-c")}`} />"#
    );
}

#[test]
fn test_template_with_escape_is_left_unchanged() {
    let source = r#"<div className={`a\nb ${x}`} />"#;
    let result = run(source);
    assert_eq!(result.code, source);
    assert_eq!(
        result.skipped,
        vec![SkippedShape {
            kind: "escaped template literal",
            line: 1
        }]
    );
}

#[test]
fn test_tagged_template_is_opaque() {
    let result = run("<div className={css`color: red;`} />");
    assert_eq!(result.code, "<div className={css`color: red;`} />");
    assert_eq!(result.skipped[0].kind, "tagged template");
}

// ============================================================================
// JOIN CALLS
// ============================================================================

#[test]
fn test_join_call_object_map_is_left_unchanged() {
    let result = run(r#"<div className={classnames("btn", {foo: bar})} />"#);
    assert_eq!(
        result.code,
        r#"<div className={classnames("app-btn", {foo: bar})} />"#
    );
    assert_eq!(
        result.skipped,
        vec![SkippedShape {
            kind: "object literal",
            line: 1
        }]
    );
}

#[test]
fn test_join_call_with_conditional_and_template() {
    assert_eq!(
        code(r#"<div className={classnames("a b", on && "c", big ? "lg" : "sm", `card-${kind}`)} />"#),
        r#"<div className={classnames("app-a app-b", on && "c", big ? "app-lg" : "app-sm", `app-card-${kind}`)} />"#
    );
}

#[test]
fn test_join_call_inside_conditional() {
    assert_eq!(
        code(r#"<div className={big ? classnames("a", "b c") : "d"} />"#),
        r#"<div className={big ? classnames("app-a", "app-b app-c") : "app-d"} />"#
    );
}

#[test]
fn test_nested_join_call() {
    assert_eq!(
        code(r#"<div className={classnames("a", classnames("b", on ? "c" : "d"))} />"#),
        r#"<div className={classnames("app-a", classnames("app-b", on ? "app-c" : "app-d"))} />"#
    );
}

#[test]
fn test_other_calls_are_untouched() {
    let source = r#"<div className={clsx("btn")} />"#;
    assert_eq!(code(source), source);
}

#[test]
fn test_member_call_is_not_a_join_call() {
    let source = r#"<div className={utils.classnames("btn")} />"#;
    assert_eq!(code(source), source);
}

// ============================================================================
// ATTRIBUTE SELECTION
// ============================================================================

#[test]
fn test_other_attributes_are_never_modified() {
    let source = r#"<input type="text" placeholder="btn primary" data-class={"x"} />"#;
    let result = run(source);
    assert_eq!(result.code, source);
    assert!(result.events.is_empty());
}

#[test]
fn test_identifier_and_member_values_are_byte_identical() {
    let source = "<div className={props.cls}>\n  <span className={ cls } />\n</div>";
    let result = run(source);
    assert_eq!(result.code, source);
    assert_eq!(result.skipped.len(), 2);
}

#[test]
fn test_strings_outside_attributes_are_untouched() {
    let source = r#"const label = "btn";
const el = <div className="btn" title={label} />;"#;
    assert_eq!(
        code(source),
        r#"const label = "btn";
const el = <div className="app-btn" title={label} />;"#
    );
}

#[test]
fn test_nested_elements_in_render_props() {
    assert_eq!(
        code(r#"<List className="list" render={(item) => <li className="item">{item}</li>} />"#),
        r#"<List className="app-list" render={(item) => <li className="app-item">{item}</li>} />"#
    );
}

#[test]
fn test_custom_attribute_and_join_call_names() {
    let config = PrefixConfig {
        prefix: "ui".to_string(),
        attribute_name: "class".to_string(),
        join_call_name: "cx".to_string(),
        ..Default::default()
    };
    let source = r#"<div class={cx("a", classnames("b"))} className="c" />"#;
    let result = transform(source, &config, &TransformOptions::default()).unwrap();
    assert_eq!(
        result.code,
        r#"<div class={cx("ui-a", classnames("b"))} className="c" />"#
    );
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_transform_is_not_idempotent() {
    let once = code(r#"<div className="foo" />"#);
    let twice = code(&once);
    assert_eq!(twice, r#"<div className="app-app-foo" />"#);
}

#[test]
fn test_same_input_same_output() {
    let source = r#"<div className={a ? "x" : `y ${b}`} />"#;
    assert_eq!(code(source), code(source));
}

#[test]
fn test_malformed_source_is_a_parse_error() {
    let err = transform(
        "const a = <div className=\"x\">;",
        &PrefixConfig::default(),
        &TransformOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, TransformError::Parse { .. }), "got {:?}", err);
}

#[test]
fn test_events_report_each_literal_in_order() {
    let source = "<div className=\"a\">\n  <p className={x ? 'b' : 'c d'} />\n</div>";
    let events = run(source).events;
    let summary: Vec<(usize, &str, &str)> = events
        .iter()
        .map(|e| (e.line, e.original.as_str(), e.updated.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, "a", "app-a"),
            (2, "b", "app-b"),
            (2, "c d", "app-c app-d"),
        ]
    );
}
