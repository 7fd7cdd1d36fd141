use super::*;

#[test]
fn html_is_passed_through_verbatim() {
    let doc = build_document("<p>hi</p>", Language::Html).unwrap();
    assert_eq!(doc.html, "<p>hi</p>");
    assert_eq!(doc.language, Language::Html);
}

#[test]
fn css_is_wrapped_in_style_block_with_placeholder_body() {
    let doc = build_document("body { color: red; }", Language::Css).unwrap();
    assert!(doc
        .html
        .contains("<style>\nbody { color: red; }\n</style>"));
    assert!(doc.html.contains("<body>"));
    assert!(doc.html.contains("CSS Preview"));
}

#[test]
fn scripts_are_embedded_in_module_with_catch() {
    for language in [Language::JavaScript, Language::TypeScript] {
        let doc = build_document("document.body.textContent = 1;", language).unwrap();
        assert!(doc.html.contains("<script type=\"module\">"));
        assert!(doc
            .html
            .contains("try {\ndocument.body.textContent = 1;\n} catch (error) {"));
        assert!(doc.html.contains("console.error(error)"));
        assert!(doc.html.contains("window.addEventListener(\"error\""));
    }
}

#[test]
fn embedded_script_cannot_close_its_element() {
    let doc = build_document("const s = \"</script><b>x</b>\";", Language::JavaScript).unwrap();
    assert!(doc.html.contains("const s = \"<\\/script><b>x</b>\";"));
    assert_eq!(doc.html.matches("</script>").count(), 2);

    let doc = build_document("x = '</SCRIPT>'", Language::JavaScript).unwrap();
    assert!(doc.html.contains("x = '<\\/SCRIPT>'"));
}

#[test]
fn non_web_languages_have_no_preview() {
    for language in [Language::Json, Language::Python, Language::PlainText] {
        assert_eq!(build_document("{}", language), None);
    }
}

#[test]
fn record_render_counts_and_keeps_last() {
    let mut state = PreviewState::default();
    state.record_render(build_document("<a>", Language::Html).unwrap());
    state.record_render(build_document("<b>", Language::Html).unwrap());
    assert_eq!(state.renders, 2);
    assert_eq!(state.last_rendered.unwrap().html, "<b>");
}

#[test]
fn sandbox_allows_only_scripts_and_same_origin() {
    assert_eq!(SANDBOX_PERMISSIONS, "allow-scripts allow-same-origin");
    assert_eq!(DEFAULT_PREVIEW_DEBOUNCE, Duration::from_millis(300));
}
