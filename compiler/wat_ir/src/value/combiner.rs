//! Combiner payloads.

use std::fmt;

use super::{Heap, TypeObject, Value};
use crate::{EnvId, EvalError, PairArena};

/// User-defined operative created by `vau`.
///
/// Receives its operands unevaluated and the calling environment bound to
/// `env_param`.
#[derive(Debug)]
pub struct Operative {
    pub params: Value,
    pub env_param: Value,
    pub body: Value,
    pub static_env: EnvId,
}

/// Wrapper that evaluates operands before handing them to `combiner`.
#[derive(Debug)]
pub struct Applicative {
    pub combiner: Value,
}

/// Macro: `expander` is combined with the unevaluated operands and the
/// result is evaluated in place of the original combination.
#[derive(Debug)]
pub struct Macro {
    pub expander: Value,
}

/// Signature of functions supplied by the embedding program.
pub type HostFn = dyn Fn(&mut PairArena, &[Value]) -> Result<Value, EvalError>;

/// Native operative supplied by the embedding program.
pub struct HostFunction {
    pub name: String,
    pub func: Box<HostFn>,
}

impl fmt::Debug for HostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Which half of a user type's constructor pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccessorRole {
    Tag,
    Untag,
}

/// Tagger or untagger returned by `make-type`.
#[derive(Debug)]
pub struct TypeAccessor {
    pub ty: Heap<TypeObject>,
    pub role: AccessorRole,
}
