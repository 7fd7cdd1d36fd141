//! In-memory workspace: ordered files plus the active-file reference.

use super::language::{classify, Language};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WorkspaceFile {
    pub name: String,
    pub content: String,
    pub language: Language,
}

impl WorkspaceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        let language = classify(&name);
        Self {
            name,
            content: content.into(),
            language,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkspaceError {
    #[error("file name must not be empty")]
    EmptyName,
    #[error("a file named `{0}` already exists")]
    DuplicateName(String),
}

/// Files are keyed by name. The active reference is a name, never a copy of the file.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    files: Vec<WorkspaceFile>,
    active: Option<String>,
}

const SAMPLE_HTML: &str = "<!DOCTYPE html>\n<html>\n  <body>\n    <h1>Hello, zbench</h1>\n  </body>\n</html>\n";
const SAMPLE_CSS: &str = "body {\n  font-family: sans-serif;\n  color: #333;\n}\n";
// Runs both as a function body and inside the preview's module script, so no top-level `return`.
const SAMPLE_JS: &str =
    "const greet = (name) => `Hello, ${name}!`;\nglobalThis.greeting = greet(\"zbench\");\n";

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starter workspace shown on first launch. The first file is active.
    pub fn with_samples() -> Self {
        let files = vec![
            WorkspaceFile::new("index.html", SAMPLE_HTML),
            WorkspaceFile::new("styles.css", SAMPLE_CSS),
            WorkspaceFile::new("script.js", SAMPLE_JS),
        ];
        let active = files.first().map(|f| f.name.clone());
        Self { files, active }
    }

    pub fn files(&self) -> &[WorkspaceFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn file(&self, name: &str) -> Option<&WorkspaceFile> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.file(name).is_some()
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_file(&self) -> Option<&WorkspaceFile> {
        self.file(self.active.as_deref()?)
    }

    pub fn active_index(&self) -> Option<usize> {
        let name = self.active.as_deref()?;
        self.files.iter().position(|f| f.name == name)
    }

    /// Appends an empty file and makes it active.
    ///
    /// Existing names are rejected; the existing file and the active reference stay as they were.
    pub fn create_file(&mut self, name: &str) -> Result<&WorkspaceFile, WorkspaceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkspaceError::EmptyName);
        }
        if self.contains(name) {
            return Err(WorkspaceError::DuplicateName(name.to_string()));
        }

        self.files.push(WorkspaceFile::new(name, String::new()));
        self.active = Some(name.to_string());
        let idx = self.files.len() - 1;
        Ok(&self.files[idx])
    }

    /// Replaces the active file's content. Returns `false` when nothing is active or the content
    /// is unchanged.
    pub fn update_active_content(&mut self, content: impl Into<String>) -> bool {
        let Some(name) = self.active.as_deref() else {
            return false;
        };
        let Some(file) = self.files.iter_mut().find(|f| f.name == name) else {
            return false;
        };

        let content = content.into();
        if file.content == content {
            return false;
        }
        file.content = content;
        true
    }

    pub fn set_active(&mut self, name: &str) -> bool {
        if !self.contains(name) || self.active.as_deref() == Some(name) {
            return false;
        }
        self.active = Some(name.to_string());
        true
    }

    pub fn clear_active(&mut self) -> bool {
        self.active.take().is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/workspace.rs"]
mod tests;
