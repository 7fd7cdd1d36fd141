#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The snippet threw; carries the rendered error value.
    #[error("Uncaught {0}")]
    Thrown(String),
    #[error("execution limit exceeded: {0}")]
    Limit(String),
    #[error("result could not be converted to text: {0}")]
    Stringify(String),
}

/// Sandboxed interpreter boundary for user snippets.
pub trait ScriptEngine {
    /// Compiles `source` as the body of a function with no parameters or external bindings,
    /// invokes it synchronously and returns the stringified return value.
    fn eval_function_body(&self, source: &str) -> Result<String, ExecutionError>;
}
