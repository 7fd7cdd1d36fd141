/// Language tag attached to every workspace file.
///
/// Derived once from the file name when the file is created; it never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Html,
    Css,
    Json,
    Python,
    PlainText,
}

/// Maps a file name to its language by the text after the last `.`.
///
/// Unknown or missing extensions resolve to [`Language::PlainText`]; this never fails.
pub fn classify(file_name: &str) -> Language {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return Language::PlainText;
    };

    match ext {
        "js" | "jsx" => Language::JavaScript,
        "ts" | "tsx" => Language::TypeScript,
        "html" => Language::Html,
        "css" => Language::Css,
        "json" => Language::Json,
        "py" => Language::Python,
        _ => Language::PlainText,
    }
}

impl Language {
    pub fn classify(file_name: &str) -> Self {
        classify(file_name)
    }

    pub fn language_id(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Python => "python",
            Self::PlainText => "plaintext",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::Json => "JSON",
            Self::Python => "Python",
            Self::PlainText => "Plain Text",
        }
    }

    pub fn is_previewable(self) -> bool {
        matches!(
            self,
            Self::Html | Self::Css | Self::JavaScript | Self::TypeScript
        )
    }

    pub fn is_script(self) -> bool {
        matches!(self, Self::JavaScript | Self::TypeScript)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
