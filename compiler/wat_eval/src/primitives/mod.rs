//! Native primitives.
//!
//! Each primitive is bound in the root environment wrapped in an
//! applicative, so it always receives evaluated arguments. Arity is checked
//! here before dispatch; the per-family modules can index `args` freely.

mod base;
mod collections;
mod numeric;
mod strings;
mod types;

use rustc_hash::FxHashMap;
use wat_ir::errors::{arity_mismatch, type_mismatch};
use wat_ir::{EnvId, EvalError, Heap, Name, Primitive, Value};

use crate::interpreter::Interpreter;

pub(crate) type PrimResult = Result<Value, EvalError>;

impl Interpreter {
    pub(crate) fn call_primitive(&mut self, prim: Primitive, args: &[Value]) -> PrimResult {
        let arity = prim.arity();
        if !arity.accepts(args.len()) {
            return Err(arity_mismatch(prim.name(), arity, args.len()));
        }
        match prim {
            Primitive::Wrap => Ok(Value::applicative(args[0].clone())),
            Primitive::Unwrap => base::unwrap(&args[0]),
            Primitive::Eq => Ok(args[0].is_identical(&args[1]).into()),
            Primitive::Cons => Ok(self.pairs.cons(args[0].clone(), args[1].clone())),
            Primitive::ListStar => Ok(self.list_star(args)),
            Primitive::MakeEnvironment => self.make_environment(args),
            Primitive::IsDefined => self.is_defined(&args[0], &args[1]),
            Primitive::MakeMacro => Ok(Value::make_macro(args[0].clone())),
            Primitive::Display => Ok(self.display_value(&args[0])),
            Primitive::Log => Ok(self.log_value(&args[0])),
            Primitive::ReadFromString => self.read_from_string(&args[0]),
            Primitive::Fail => Err(self.fail(&args[0])),
            Primitive::CurrentMilliseconds => base::current_milliseconds(),

            Primitive::NumEq => numeric::num_eq(&args[0], &args[1]),
            Primitive::NumLt => numeric::num_lt(&args[0], &args[1]),
            Primitive::Add => numeric::add(&args[0], &args[1]),
            Primitive::Sub => numeric::sub(&args[0], &args[1]),
            Primitive::Mul => numeric::mul(&args[0], &args[1]),
            Primitive::Div => numeric::div(&args[0], &args[1]),
            Primitive::Rem => numeric::rem(&args[0], &args[1]),
            Primitive::StringToNumber => numeric::string_to_number(&args[0]),
            Primitive::NumberToString => numeric::number_to_string(&args[0]),

            Primitive::StrEq => strings::str_eq(&args[0], &args[1]),
            Primitive::StrCat => strings::strcat(args),
            Primitive::StrPrint => Ok(Value::string(&self.write(&args[0]))),
            Primitive::StringToSymbol => self.string_to_symbol(&args[0]),
            Primitive::SymbolToString => self.symbol_to_string(&args[0]),

            Primitive::Vector => Ok(Value::vector(args.to_vec())),
            Primitive::VectorRef => collections::vector_ref(&args[0], &args[1]),
            Primitive::VectorSet => collections::vector_set(&args[0], &args[1], &args[2]),
            Primitive::VectorLength => collections::vector_length(&args[0]),
            Primitive::MakeIdentityTable => Ok(Value::identity_table()),
            Primitive::IdentityTablePut => {
                collections::identity_table_put(&args[0], &args[1], &args[2])
            }
            Primitive::IdentityTableGet => {
                collections::identity_table_get(&args[0], &args[1], &args[2])
            }
            Primitive::MakeStringTable => Ok(Value::string_table()),
            Primitive::StringTablePut => {
                collections::string_table_put(&args[0], &args[1], &args[2])
            }
            Primitive::StringTableGet => {
                collections::string_table_get(&args[0], &args[1], &args[2])
            }
            Primitive::IdentityHashCode => Ok(collections::identity_hash_code(&args[0])),

            Primitive::MakeType => Ok(self.make_type()),
            Primitive::TypeOf => Ok(self.types.type_of(&args[0])),
            Primitive::Label => types::label(&args[0]),
            Primitive::SetLabel => types::set_label(&args[0], &args[1]),
            Primitive::PutMethod => types::put_method(&args[0], &args[1], &args[2]),
            Primitive::FindMethod => types::find_method(&args[0], &args[1], &args[2]),
        }
    }
}

// Argument helpers

pub(crate) fn str_arg(value: &Value) -> Result<&Heap<str>, EvalError> {
    match value {
        Value::Str(s) => Ok(s),
        other => Err(type_mismatch("string", other.kind_name())),
    }
}

pub(crate) fn symbol_arg(value: &Value) -> Result<Name, EvalError> {
    match value {
        Value::Symbol(name) => Ok(*name),
        other => Err(type_mismatch("symbol", other.kind_name())),
    }
}

pub(crate) fn int_arg(value: &Value) -> Result<i64, EvalError> {
    match value {
        Value::Int(n) => Ok(*n),
        other => Err(type_mismatch("integer", other.kind_name())),
    }
}

pub(crate) fn env_arg(value: &Value) -> Result<EnvId, EvalError> {
    match value {
        Value::Env(id) => Ok(*id),
        other => Err(type_mismatch("environment", other.kind_name())),
    }
}

/// Registry of the types `type-of` reports for built-in values.
///
/// One type object per value kind, created on first use so that repeated
/// `type-of` calls on the same kind return the identical type.
#[derive(Default)]
pub(crate) struct TypeRegistry {
    builtin: FxHashMap<&'static str, Value>,
}

impl TypeRegistry {
    pub(crate) fn type_of(&mut self, value: &Value) -> Value {
        match value {
            Value::Tagged(tagged) => Value::Type(tagged.ty.clone()),
            other => {
                let kind = other.kind_name();
                self.builtin
                    .entry(kind)
                    .or_insert_with(|| Value::new_type(Some(kind)))
                    .clone()
            }
        }
    }
}
