//! Wat IR: the data shared by the reader and the evaluator.
//!
//! - [`Name`] and [`StringInterner`] for symbols
//! - [`PairArena`] holding every pair, addressed by [`PairId`]
//! - [`Value`], the runtime value model
//! - [`Frame`], [`Suspension`] and [`Continuation`] for delimited control
//! - [`EvalError`] and [`ControlAction`], the error side of [`EvalResult`]

mod arena;
mod builtins;
pub mod errors;
mod frame;
mod ids;
mod interner;
mod name;
pub mod value;

pub use arena::PairArena;
pub use builtins::{Arity, Form, Primitive};
pub use errors::{ControlAction, EvalError, EvalErrorKind, EvalResult, SuspendExt, Thrown};
pub use frame::{Continuation, EvaluatedArgs, Frame, Suspension};
pub use ids::{EnvId, PairId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use value::{Heap, IdentityKey, Macro, Value};
