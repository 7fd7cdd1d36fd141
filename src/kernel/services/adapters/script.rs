//! JavaScript snippet runner backed by the `boa` engine.
//!
//! Every run gets a fresh `Context`, so snippets share no globals with each other or the host.
//! Runtime limits bound loops, recursion and stack growth; violations surface as
//! [`ExecutionError::Limit`] instead of hanging the UI loop.

use boa_engine::ast::scope::Scope;
use boa_engine::ast::{Expression, Script, Statement, StatementListItem};
use boa_engine::error::JsNativeErrorKind;
use boa_engine::interner::Interner;
use boa_engine::parser::Parser;
use boa_engine::{Context, JsError, Source};

use crate::kernel::services::ports::{ExecutionError, ExecutionSettings, ScriptEngine};

#[derive(Debug, Clone, Default)]
pub struct BoaScriptEngine {
    limits: ExecutionSettings,
}

impl BoaScriptEngine {
    pub fn new(limits: ExecutionSettings) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ExecutionSettings {
        &self.limits
    }

    fn context(&self) -> Context {
        let mut context = Context::default();
        let limits = context.runtime_limits_mut();
        limits.set_loop_iteration_limit(self.limits.loop_iteration_limit);
        limits.set_recursion_limit(self.limits.recursion_limit);
        limits.set_stack_size_limit(self.limits.stack_size_limit);
        context
    }
}

impl ScriptEngine for BoaScriptEngine {
    fn eval_function_body(&self, source: &str) -> Result<String, ExecutionError> {
        let wrapped = wrap_function_body(source)?;
        let program = format!("{wrapped}()");

        let mut context = self.context();
        let value = context
            .eval(Source::from_bytes(program.as_bytes()))
            .map_err(|err| describe_error(&err, &mut context))?;

        value
            .to_string(&mut context)
            .map(|s| s.to_std_string_escaped())
            .map_err(|err| ExecutionError::Stringify(describe_error(&err, &mut context).to_string()))
    }
}

/// Wraps `source` in a function expression and checks that the whole program is exactly that
/// expression. A body that closes the wrapper early parses into some other shape and is
/// rejected before anything runs.
fn wrap_function_body(source: &str) -> Result<String, ExecutionError> {
    let wrapped = format!("(function () {{\n{source}\n}})");

    let mut interner = Interner::default();
    let script = Parser::new(Source::from_bytes(wrapped.as_bytes()))
        .parse_script(&Scope::new_global(), &mut interner)
        .map_err(|err| ExecutionError::Thrown(format!("SyntaxError: {err}")))?;

    if !is_single_function_expression(&script) {
        return Err(ExecutionError::Thrown(
            "SyntaxError: unbalanced braces close the function body early".to_string(),
        ));
    }
    Ok(wrapped)
}

fn is_single_function_expression(script: &Script) -> bool {
    match script.statements().statements() {
        [StatementListItem::Statement(Statement::Expression(Expression::Parenthesized(inner)))] => {
            matches!(inner.expression(), Expression::FunctionExpression(_))
        }
        _ => false,
    }
}

fn describe_error(err: &JsError, context: &mut Context) -> ExecutionError {
    match err.try_native(context) {
        Ok(native) if matches!(native.kind, JsNativeErrorKind::RuntimeLimit) => {
            ExecutionError::Limit(native.message().to_string())
        }
        Ok(native) => ExecutionError::Thrown(native.to_string()),
        Err(_) => {
            let text = err
                .as_opaque()
                .and_then(|value| value.to_string(context).ok())
                .map(|s| s.to_std_string_escaped())
                .unwrap_or_else(|| err.to_string());
            ExecutionError::Thrown(text)
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/script.rs"]
mod tests;
