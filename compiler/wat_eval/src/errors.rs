//! Errors surfaced to embedding programs.

use thiserror::Error;
use wat_ir::EvalError;
use wat_parse::ReadError;

/// Failure of [`Interpreter::eval_source`](crate::Interpreter::eval_source).
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
