//! Runtime values.
//!
//! # Heap Enforcement
//!
//! Heap payloads are wrapped in [`Heap<T>`], whose constructor is private to
//! this crate. Code outside `wat_ir` builds them through the factory methods
//! on [`Value`]:
//!
//! ```text
//! let s = Value::string("hello");            // OK
//! let v = Value::vector(vec![Value::Int(1)]); // OK
//! let s = Value::Str(Heap::new(..));          // ERROR: Heap::new is pub(crate)
//! ```
//!
//! # Identity
//!
//! Pairs and environments are arena indices; every other heap value is
//! identified by its allocation. [`Value::identity`] folds both into an
//! [`IdentityKey`] used by `eq?` and identity hashtables.

mod combiner;
mod heap;
mod object;

use std::cell::RefCell;

pub use combiner::{
    AccessorRole, Applicative, HostFn, HostFunction, Macro, Operative, TypeAccessor,
};
pub use heap::Heap;
pub use object::{DynamicCell, IdentityTable, StringTable, Tagged, TypeObject};

use crate::{Continuation, EnvId, EvalError, Form, Frame, Name, PairArena, PairId, Primitive};

/// Runtime value of the Wat language.
///
/// Pair and environment payloads are indices into arenas owned by the
/// interpreter, so a `Value` is only meaningful next to those arenas.
#[derive(Clone, Debug)]
pub enum Value {
    // Immediates
    /// The empty list.
    Nil,
    /// `#ign`, the ignore marker in parameter patterns.
    Ign,
    /// `#void`, the result of effects.
    Void,
    Bool(bool),
    Int(i64),
    Float(f64),
    Symbol(Name),

    // Arena references
    Pair(PairId),
    Env(EnvId),

    // Combiners
    Form(Form),
    Primitive(Primitive),
    Host(Heap<HostFunction>),
    Operative(Heap<Operative>),
    Applicative(Heap<Applicative>),
    TypeAccessor(Heap<TypeAccessor>),

    // Other heap values
    Str(Heap<str>),
    Macro(Heap<Macro>),
    Vector(Heap<RefCell<Vec<Value>>>),
    DynVar(Heap<DynamicCell>),
    Continuation(Heap<Continuation>),
    Type(Heap<TypeObject>),
    Tagged(Heap<Tagged>),
    IdentityTable(Heap<IdentityTable>),
    StringTable(Heap<StringTable>),
}

/// Hashable identity of a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    Nil,
    Ign,
    Void,
    Bool(bool),
    Int(i64),
    Float(u64),
    Symbol(Name),
    Pair(PairId),
    Env(EnvId),
    Form(Form),
    Primitive(Primitive),
    Address(usize),
}

impl Value {
    // Factory methods

    pub fn string(s: &str) -> Self {
        Value::Str(Heap::copy_from(s))
    }

    pub fn operative(params: Value, env_param: Value, body: Value, static_env: EnvId) -> Self {
        Value::Operative(Heap::new(Operative {
            params,
            env_param,
            body,
            static_env,
        }))
    }

    pub fn applicative(combiner: Value) -> Self {
        Value::Applicative(Heap::new(Applicative { combiner }))
    }

    pub fn make_macro(expander: Value) -> Self {
        Value::Macro(Heap::new(Macro { expander }))
    }

    pub fn host<F>(name: &str, func: F) -> Self
    where
        F: Fn(&mut PairArena, &[Value]) -> Result<Value, EvalError> + 'static,
    {
        Value::Host(Heap::new(HostFunction {
            name: name.to_owned(),
            func: Box::new(func),
        }))
    }

    pub fn dynamic(initial: Value) -> Self {
        Value::DynVar(Heap::new(DynamicCell::new(initial)))
    }

    pub fn continuation(frames: Vec<Frame>) -> Self {
        Value::Continuation(Heap::new(Continuation::new(frames)))
    }

    pub fn vector(items: Vec<Value>) -> Self {
        Value::Vector(Heap::new(RefCell::new(items)))
    }

    pub fn new_type(label: Option<&str>) -> Self {
        Value::Type(Self::type_object(label))
    }

    /// Fresh type object, for callers that hand out the handle itself.
    pub fn type_object(label: Option<&str>) -> Heap<TypeObject> {
        Heap::new(TypeObject::new(label))
    }

    pub fn type_accessor(ty: &Heap<TypeObject>, role: AccessorRole) -> Self {
        Value::TypeAccessor(Heap::new(TypeAccessor {
            ty: ty.clone(),
            role,
        }))
    }

    pub fn tagged(ty: &Heap<TypeObject>, value: Value) -> Self {
        Value::Tagged(Heap::new(Tagged {
            ty: ty.clone(),
            value,
        }))
    }

    pub fn identity_table() -> Self {
        Value::IdentityTable(Heap::new(IdentityTable::default()))
    }

    pub fn string_table() -> Self {
        Value::StringTable(Heap::new(StringTable::default()))
    }

    // Queries

    /// Only `#f` is false.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_combiner(&self) -> bool {
        matches!(
            self,
            Value::Form(_)
                | Value::Primitive(_)
                | Value::Host(_)
                | Value::Operative(_)
                | Value::Applicative(_)
                | Value::TypeAccessor(_)
        )
    }

    /// Identity used by `eq?`.
    pub fn identity(&self) -> IdentityKey {
        match self {
            Value::Nil => IdentityKey::Nil,
            Value::Ign => IdentityKey::Ign,
            Value::Void => IdentityKey::Void,
            Value::Bool(b) => IdentityKey::Bool(*b),
            Value::Int(n) => IdentityKey::Int(*n),
            Value::Float(f) => IdentityKey::Float(f.to_bits()),
            Value::Symbol(name) => IdentityKey::Symbol(*name),
            Value::Pair(id) => IdentityKey::Pair(*id),
            Value::Env(id) => IdentityKey::Env(*id),
            Value::Form(form) => IdentityKey::Form(*form),
            Value::Primitive(prim) => IdentityKey::Primitive(*prim),
            Value::Host(h) => IdentityKey::Address(h.addr()),
            Value::Operative(h) => IdentityKey::Address(h.addr()),
            Value::Applicative(h) => IdentityKey::Address(h.addr()),
            Value::TypeAccessor(h) => IdentityKey::Address(h.addr()),
            Value::Str(h) => IdentityKey::Address(h.addr()),
            Value::Macro(h) => IdentityKey::Address(h.addr()),
            Value::Vector(h) => IdentityKey::Address(h.addr()),
            Value::DynVar(h) => IdentityKey::Address(h.addr()),
            Value::Continuation(h) => IdentityKey::Address(h.addr()),
            Value::Type(h) => IdentityKey::Address(h.addr()),
            Value::Tagged(h) => IdentityKey::Address(h.addr()),
            Value::IdentityTable(h) => IdentityKey::Address(h.addr()),
            Value::StringTable(h) => IdentityKey::Address(h.addr()),
        }
    }

    #[inline]
    pub fn is_identical(&self, other: &Value) -> bool {
        self.identity() == other.identity()
    }

    /// Name of the built-in type of this value.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Nil => "Nil",
            Value::Ign => "Ign",
            Value::Void => "Void",
            Value::Bool(_) => "Boolean",
            Value::Int(_) | Value::Float(_) => "Number",
            Value::Symbol(_) => "Symbol",
            Value::Pair(_) => "Pair",
            Value::Env(_) => "Environment",
            Value::Form(_) => "Form",
            Value::Primitive(_) => "Primitive",
            Value::Host(_) => "HostFunction",
            Value::Operative(_) => "Operative",
            Value::Applicative(_) => "Applicative",
            Value::TypeAccessor(_) => "TypeAccessor",
            Value::Str(_) => "String",
            Value::Macro(_) => "Macro",
            Value::Vector(_) => "Vector",
            Value::DynVar(_) => "DynamicVariable",
            Value::Continuation(_) => "Continuation",
            Value::Type(_) => "Type",
            Value::Tagged(_) => "Tagged",
            Value::IdentityTable(_) => "IdentityHashtable",
            Value::StringTable(_) => "StringHashtable",
        }
    }
}

/// Numbers and strings compare by content, heap values by identity.
impl PartialEq for Value {
    #[allow(clippy::float_cmp, reason = "language equality is exact")]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            _ => self.identity() == other.identity(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}
