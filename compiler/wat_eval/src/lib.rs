//! Wat Eval - evaluator for the Wat vau-calculus language.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environments`: an arena of first-class environments addressed by `EnvId`
//! - `Interpreter`: owns the arenas and evaluates forms, see [`interpreter`]
//! - `MacroCache`: per-combination cache of macro expansions
//! - `Printer`: renders values for `display`, `write` and diagnostics
//! - `primitives`: the native applicatives bound in the root environment
//!
//! Delimited continuations are built from suspensions that collect one
//! `wat_ir::Frame` per suspendable step as they travel to their prompt.
//!
//! # Re-exports
//!
//! Value and error types are re-exported from `wat_ir`, the reader entry
//! point from `wat_parse`.

mod environment;
mod errors;
mod eval_mode;
pub mod interpreter;
mod macro_cache;
mod output;
mod prelude;
mod primitives;
mod printer;

pub use wat_ir::{
    ControlAction, EnvId, EvalError, EvalErrorKind, EvalResult, PairArena, StringInterner, Thrown,
    Value,
};
pub use wat_parse::{parse, ReadError};

pub use environment::Environments;
pub use errors::RunError;
pub use eval_mode::{EvalMode, ModeState};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use macro_cache::MacroCache;
pub use output::{buffer_output, silent_output, stdout_output, OutputSink, SharedOutput};
pub use printer::Printer;
pub use wat_stack::ensure_sufficient_stack;

#[cfg(test)]
mod tests;
