use super::*;

fn engine() -> BoaScriptEngine {
    BoaScriptEngine::default()
}

#[test]
fn returns_stringified_value() {
    assert_eq!(engine().eval_function_body("return 2+2").unwrap(), "4");
    assert_eq!(
        engine()
            .eval_function_body("const a = [1, 2]; return a.map(x => x * 2);")
            .unwrap(),
        "2,4"
    );
}

#[test]
fn missing_return_is_undefined() {
    assert_eq!(engine().eval_function_body("let x = 1;").unwrap(), "undefined");
}

#[test]
fn thrown_error_is_reported_with_message() {
    let err = engine()
        .eval_function_body("throw new Error('x')")
        .unwrap_err();
    assert_eq!(err, ExecutionError::Thrown("Error: x".to_string()));
    assert!(err.to_string().contains('x'));
}

#[test]
fn thrown_non_error_value_is_stringified() {
    let err = engine().eval_function_body("throw 42").unwrap_err();
    assert_eq!(err, ExecutionError::Thrown("42".to_string()));
}

#[test]
fn syntax_errors_are_contained() {
    let err = engine().eval_function_body("return (").unwrap_err();
    assert!(matches!(err, ExecutionError::Thrown(ref m) if m.starts_with("SyntaxError")));
}

#[test]
fn pending_promise_is_not_awaited() {
    assert_eq!(
        engine()
            .eval_function_body("return Promise.resolve(1)")
            .unwrap(),
        "[object Promise]"
    );
}

#[test]
fn runs_do_not_share_globals() {
    let engine = engine();
    engine
        .eval_function_body("globalThis.leaked = 1; return 0;")
        .unwrap();
    assert_eq!(
        engine.eval_function_body("return typeof leaked").unwrap(),
        "undefined"
    );
}

#[test]
fn snippet_cannot_escape_the_function_wrapper() {
    let result = engine().eval_function_body("}); (function() { return 1;");
    assert!(result.is_err());
}

#[test]
fn early_close_is_a_syntax_error_and_runs_nothing() {
    let err = engine()
        .eval_function_body("return 5 }); globalThis.outside = 7; (function(){")
        .unwrap_err();
    assert!(matches!(err, ExecutionError::Thrown(ref m) if m.starts_with("SyntaxError")));

    let err = engine()
        .eval_function_body("}, function() {")
        .unwrap_err();
    assert!(matches!(err, ExecutionError::Thrown(ref m) if m.starts_with("SyntaxError")));
}

#[test]
fn braces_inside_strings_and_comments_are_fine() {
    assert_eq!(
        engine()
            .eval_function_body("// }\nconst s = '})'; return s + `{`;")
            .unwrap(),
        "}){"
    );
    assert_eq!(engine().eval_function_body("return 1 // trailing").unwrap(), "1");
}

#[test]
fn infinite_loop_hits_iteration_limit() {
    let engine = BoaScriptEngine::new(ExecutionSettings {
        loop_iteration_limit: 1_000,
        ..ExecutionSettings::default()
    });
    let err = engine.eval_function_body("while (true) {}").unwrap_err();
    assert!(matches!(err, ExecutionError::Limit(_)));
}

#[test]
fn runaway_recursion_hits_recursion_limit() {
    let engine = BoaScriptEngine::new(ExecutionSettings {
        recursion_limit: 64,
        ..ExecutionSettings::default()
    });
    let err = engine
        .eval_function_body("function f() { return f(); } return f();")
        .unwrap_err();
    assert!(matches!(err, ExecutionError::Limit(_)));
}
