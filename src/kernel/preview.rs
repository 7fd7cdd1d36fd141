//! Live preview: turns the active file into a standalone document for the sandboxed frame.

use std::time::Duration;

use super::language::Language;

pub const DEFAULT_PREVIEW_DEBOUNCE: Duration = Duration::from_millis(300);

/// The only permissions granted to previewed content.
pub const SANDBOX_PERMISSIONS: &str = "allow-scripts allow-same-origin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument {
    pub language: Language,
    pub html: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("preview frame is not attached")]
    Detached,
    #[error("preview frame rejected the document: {0}")]
    Rejected(String),
}

const CSS_PLACEHOLDER_BODY: &str = "<div class=\"zbench-preview\">\n  <h1>CSS Preview</h1>\n  <p>Styles from the active file are applied to this page.</p>\n  <button>Button</button>\n</div>";

// Module scripts report their own syntax errors through `window.onerror`, not through the
// surrounding try/catch.
const SCRIPT_ERROR_LISTENER: &str = "<script>\nwindow.addEventListener(\"error\", function (event) {\n  console.error(event.error || event.message);\n});\n</script>";

/// Builds the preview document, or `None` when the language has no preview.
pub fn build_document(content: &str, language: Language) -> Option<PreviewDocument> {
    let html = match language {
        Language::Html => content.to_string(),
        Language::Css => format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<style>\n{content}\n</style>\n</head>\n<body>\n{CSS_PLACEHOLDER_BODY}\n</body>\n</html>"
        ),
        Language::JavaScript | Language::TypeScript => {
            let script = escape_script_close(content);
            format!(
                "<!DOCTYPE html>\n<html>\n<head></head>\n<body>\n{SCRIPT_ERROR_LISTENER}\n<script type=\"module\">\ntry {{\n{script}\n}} catch (error) {{\n  console.error(error);\n}}\n</script>\n</body>\n</html>"
            )
        }
        Language::Json | Language::Python | Language::PlainText => return None,
    };

    Some(PreviewDocument { language, html })
}

/// Keeps embedded code from terminating its own `<script>` element.
fn escape_script_close(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(idx) = find_ascii_case_insensitive(rest, "</script") {
        out.push_str(&rest[..idx]);
        out.push_str("<\\/");
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}

fn find_ascii_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
}

/// Rendering bookkeeping kept in the app state; the debounce itself lives in the scheduler.
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    pub last_rendered: Option<PreviewDocument>,
    pub renders: u64,
}

impl PreviewState {
    pub fn record_render(&mut self, document: PreviewDocument) {
        self.renders = self.renders.saturating_add(1);
        self.last_rendered = Some(document);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/preview.rs"]
mod tests;
