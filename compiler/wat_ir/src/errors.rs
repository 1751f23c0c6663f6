//! Evaluation errors and non-local control.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed error categories. Factory functions
//! (e.g., `unbound_identifier()`) are the public API; they populate both
//! `kind` and `message`.
//!
//! # Control Actions
//!
//! Evaluation returns [`EvalResult`]. The error side is a [`ControlAction`]:
//! a suspension travelling out to its prompt, a tagged exception travelling
//! out to its catch, or a host-level [`EvalError`] that aborts the program.

use std::fmt;

use crate::{Frame, Suspension, Value};

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, ControlAction>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Lookup
    UnboundIdentifier {
        name: String,
    },

    // Shape
    MalformedCombination {
        form: String,
        detail: String,
    },
    MalformedPattern {
        pattern: String,
    },
    PatternMismatch {
        pattern: String,
        value: String,
    },

    // Type
    TypeMismatch {
        expected: String,
        got: String,
    },
    NotCombiner {
        got: String,
    },
    ArityMismatch {
        name: String,
        expected: String,
        got: usize,
    },

    // Arithmetic and access
    DivisionByZero,
    IntegerOverflow {
        operation: String,
    },
    IndexOutOfBounds {
        index: i64,
        len: usize,
    },

    // Escaped control
    UncaughtThrow {
        tag: String,
        payload: String,
    },
    UnhandledSuspension {
        prompt: String,
    },

    // Limits and invariants
    BudgetExceeded {
        budget: u32,
    },
    AssertionFailed {
        message: String,
    },

    /// Raised by the `fail` primitive.
    Failure {
        message: String,
    },
    /// `read-from-string` could not read its input.
    Read {
        message: String,
    },
    /// Errors raised by host functions through `EvalError::new`.
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundIdentifier { name } => write!(f, "unbound identifier: {name}"),
            Self::MalformedCombination { form, detail } => {
                write!(f, "malformed {form}: {detail}")
            }
            Self::MalformedPattern { pattern } => write!(f, "malformed pattern: {pattern}"),
            Self::PatternMismatch { pattern, value } => {
                write!(f, "cannot match {value} against pattern {pattern}")
            }
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::NotCombiner { got } => write!(f, "not a combiner: {got}"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => write!(f, "{name} expects {expected} arguments, got {got}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::UncaughtThrow { tag, payload } => {
                write!(f, "uncaught throw to {tag} with {payload}")
            }
            Self::UnhandledSuspension { prompt } => {
                write!(f, "no enclosing prompt for {prompt}")
            }
            Self::BudgetExceeded { budget } => {
                write!(f, "evaluation exceeded its budget of {budget} steps")
            }
            Self::AssertionFailed { message } => write!(f, "assertion failed: {message}"),
            Self::Failure { message } => write!(f, "fail: {message}"),
            Self::Read { message } => write!(f, "read error: {message}"),
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Tagged exception raised by `throw*`.
#[derive(Clone, Debug)]
pub struct Thrown {
    pub tag: Value,
    pub payload: Value,
}

/// Host-level evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory errors.
    pub message: String,
    /// For `UncaughtThrow`, the exception that escaped.
    pub thrown: Option<Box<Thrown>>,
    /// Context added while the error propagated outward.
    pub notes: Vec<String>,
}

impl EvalError {
    /// Create an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            thrown: None,
            notes: Vec::new(),
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            thrown: None,
            notes: Vec::new(),
        }
    }

    /// Attach a context note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

// Factory functions

#[cold]
pub fn unbound_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundIdentifier {
        name: name.to_owned(),
    })
}

#[cold]
pub fn malformed_combination(form: &str, detail: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedCombination {
        form: form.to_owned(),
        detail: detail.into(),
    })
}

#[cold]
pub fn malformed_pattern(pattern: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedPattern {
        pattern: pattern.into(),
    })
}

#[cold]
pub fn pattern_mismatch(pattern: impl Into<String>, value: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::PatternMismatch {
        pattern: pattern.into(),
        value: value.into(),
    })
}

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_owned(),
        got: got.to_owned(),
    })
}

#[cold]
pub fn not_a_combiner(got: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCombiner { got: got.into() })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: impl fmt::Display, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_owned(),
        expected: expected.to_string(),
        got,
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_owned(),
    })
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

/// Error for a throw that reached the top level; keeps the exception.
#[cold]
pub fn uncaught_throw(thrown: Thrown, tag: String, payload: String) -> EvalError {
    let mut err = EvalError::from_kind(EvalErrorKind::UncaughtThrow { tag, payload });
    err.thrown = Some(Box::new(thrown));
    err
}

#[cold]
pub fn unhandled_suspension(prompt: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnhandledSuspension {
        prompt: prompt.into(),
    })
}

#[cold]
pub fn budget_exceeded(budget: u32) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BudgetExceeded { budget })
}

#[cold]
pub fn assertion_failed(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AssertionFailed {
        message: message.into(),
    })
}

#[cold]
pub fn failure(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Failure {
        message: message.into(),
    })
}

#[cold]
pub fn read_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Read {
        message: message.into(),
    })
}

/// Non-local exit travelling outward through the evaluator.
#[derive(Clone, Debug)]
pub enum ControlAction {
    /// Unwinding toward the prompt named in the suspension.
    Suspend(Box<Suspension>),
    /// Tagged exception unwinding toward a matching catch.
    Throw(Box<Thrown>),
    /// Host-level error; aborts the current program.
    Error(Box<EvalError>),
}

impl ControlAction {
    pub fn throw(tag: Value, payload: Value) -> Self {
        ControlAction::Throw(Box::new(Thrown { tag, payload }))
    }

    pub fn is_suspension(&self) -> bool {
        matches!(self, ControlAction::Suspend(_))
    }
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        ControlAction::Error(Box::new(err))
    }
}

impl From<Suspension> for ControlAction {
    fn from(suspension: Suspension) -> Self {
        ControlAction::Suspend(Box::new(suspension))
    }
}

/// Records continuation frames on suspensions passing through.
pub trait SuspendExt {
    /// If `self` is a suspension, push the frame built by `frame` onto it.
    ///
    /// Other outcomes pass through untouched and `frame` is not called.
    #[must_use]
    fn on_suspend(self, frame: impl FnOnce() -> Frame) -> Self;
}

impl SuspendExt for EvalResult {
    #[inline]
    fn on_suspend(self, frame: impl FnOnce() -> Frame) -> Self {
        match self {
            Err(ControlAction::Suspend(mut suspension)) => {
                suspension.push_frame(frame());
                Err(ControlAction::Suspend(suspension))
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests;
