//! Evaluator tests driven through the public entry points.
//!
//! Unit tests for individual modules live next to them; these suites
//! exercise whole programs, prelude included.

mod combiner_tests;
mod dynamic_tests;
mod exception_tests;
mod macro_tests;

use crate::{EvalError, EvalMode, Interpreter, InterpreterBuilder, RunError, Value};

/// Finish `builder`, panicking if the prelude fails to load.
fn build(builder: InterpreterBuilder) -> Interpreter {
    match builder.build() {
        Ok(interp) => interp,
        Err(err) => panic!("prelude failed to load: {err}"),
    }
}

/// Interpreter with the prelude loaded and output captured in a buffer.
fn interp() -> Interpreter {
    build(Interpreter::builder().mode(EvalMode::TestRun))
}

/// Evaluate `source`, panicking on any error.
fn run(interp: &mut Interpreter, source: &str) -> Value {
    match interp.eval_source(source) {
        Ok(value) => value,
        Err(err) => panic!("{source}: {err}"),
    }
}

/// Evaluate `source` and render the result readably.
fn run_written(interp: &mut Interpreter, source: &str) -> String {
    let value = run(interp, source);
    interp.write(&value)
}

/// Evaluate `source` in a fresh interpreter and render the result.
fn eval_written(source: &str) -> String {
    run_written(&mut interp(), source)
}

/// Evaluate `source`, expecting an evaluation error.
fn run_err(interp: &mut Interpreter, source: &str) -> EvalError {
    match interp.eval_source(source) {
        Err(RunError::Eval(err)) => err,
        Err(RunError::Read(err)) => panic!("{source}: unexpected read error: {err}"),
        Ok(value) => panic!("{source}: expected an error, got {}", interp.write(&value)),
    }
}
