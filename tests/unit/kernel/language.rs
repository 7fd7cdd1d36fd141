use crate::kernel::language::{classify, Language};

#[test]
fn classify_maps_all_supported_extensions() {
    let cases = [
        ("a.js", Language::JavaScript),
        ("a.jsx", Language::JavaScript),
        ("a.ts", Language::TypeScript),
        ("a.tsx", Language::TypeScript),
        ("a.html", Language::Html),
        ("a.css", Language::Css),
        ("a.json", Language::Json),
        ("a.py", Language::Python),
    ];

    for (name, expected) in cases {
        assert_eq!(classify(name), expected, "{name}");
    }
}

#[test]
fn classify_falls_back_to_plaintext() {
    let cases = ["a.xyz", "noext", "a.", "Makefile", "a.JS", "notes.txt", "a.htm"];
    for name in cases {
        assert_eq!(classify(name), Language::PlainText, "{name}");
    }
}

#[test]
fn classify_uses_the_last_extension() {
    assert_eq!(classify("bundle.min.js"), Language::JavaScript);
    assert_eq!(classify("types.d.ts"), Language::TypeScript);
    assert_eq!(classify("archive.js.bak"), Language::PlainText);
    assert_eq!(classify(".py"), Language::Python);
}

#[test]
fn language_ids_are_lowercase_tags() {
    let cases = [
        (Language::JavaScript, "javascript"),
        (Language::TypeScript, "typescript"),
        (Language::Html, "html"),
        (Language::Css, "css"),
        (Language::Json, "json"),
        (Language::Python, "python"),
        (Language::PlainText, "plaintext"),
    ];

    for (language, id) in cases {
        assert_eq!(language.language_id(), id);
        let json = serde_json::to_string(&language).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}

#[test]
fn previewable_languages() {
    assert!(Language::Html.is_previewable());
    assert!(Language::Css.is_previewable());
    assert!(Language::JavaScript.is_previewable());
    assert!(Language::TypeScript.is_previewable());
    assert!(!Language::Json.is_previewable());
    assert!(!Language::Python.is_previewable());
    assert!(!Language::PlainText.is_previewable());
}
