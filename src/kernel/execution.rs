//! Runs the active file on explicit request and reports into the terminal.

use super::language::Language;
use super::services::ports::{ScriptEngine, TerminalSink};
use super::workspace::WorkspaceFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Python has no interpreter here; the source is echoed back.
    Echoed,
    Returned(String),
    Failed(String),
    /// Language without a runner; only the header line was written.
    Skipped,
}

pub struct ExecutionDispatcher<S: ScriptEngine> {
    engine: S,
    prompt: String,
}

impl<S: ScriptEngine> ExecutionDispatcher<S> {
    pub fn new(engine: S, prompt: impl Into<String>) -> Self {
        Self {
            engine,
            prompt: prompt.into(),
        }
    }

    pub fn engine(&self) -> &S {
        &self.engine
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Never panics on snippet failures; every outcome ends with a fresh prompt.
    pub fn run(&self, file: &WorkspaceFile, terminal: &mut dyn TerminalSink) -> ExecutionOutcome {
        terminal.write("\r\n");
        terminal.write_line(&format!("Executing {}...", file.name));

        let outcome = match file.language {
            Language::Python => {
                for line in file.content.lines() {
                    terminal.write_line(line);
                }
                ExecutionOutcome::Echoed
            }
            Language::JavaScript | Language::TypeScript => {
                match self.engine.eval_function_body(&file.content) {
                    Ok(value) => {
                        terminal.write_line(&format!("Result: {value}"));
                        ExecutionOutcome::Returned(value)
                    }
                    Err(err) => {
                        let message = err.to_string();
                        tracing::debug!(file = %file.name, error = %message, "snippet failed");
                        terminal.write_line(&message);
                        ExecutionOutcome::Failed(message)
                    }
                }
            }
            Language::Html | Language::Css | Language::Json | Language::PlainText => {
                ExecutionOutcome::Skipped
            }
        };

        terminal.write(&self.prompt);
        outcome
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/execution.rs"]
mod tests;
