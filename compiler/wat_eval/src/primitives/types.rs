//! User-defined types: `make-type`, taggers, labels and method tables.

use wat_ir::errors::{arity_mismatch, type_mismatch};
use wat_ir::value::{AccessorRole, TypeAccessor, TypeObject};
use wat_ir::{EvalError, Heap, Value};

use super::{str_arg, PrimResult};
use crate::interpreter::Interpreter;

const ANONYMOUS: &str = "anonymous";

fn type_arg(value: &Value) -> Result<&Heap<TypeObject>, EvalError> {
    match value {
        Value::Type(ty) => Ok(ty),
        other => Err(type_mismatch("type", other.kind_name())),
    }
}

/// `(label type)`
pub(super) fn label(ty: &Value) -> PrimResult {
    Ok(match type_arg(ty)?.label() {
        Some(label) => Value::Str(label),
        None => Value::string(ANONYMOUS),
    })
}

/// `(set-label! type name)` returns `name`.
pub(super) fn set_label(ty: &Value, name: &Value) -> PrimResult {
    type_arg(ty)?.set_label(str_arg(name)?.clone());
    Ok(name.clone())
}

/// `(put-method! type name method)` returns `method`.
pub(super) fn put_method(ty: &Value, name: &Value, method: &Value) -> PrimResult {
    type_arg(ty)?.put_method(method_name(name)?, method.clone());
    Ok(method.clone())
}

/// `(find-method type name default)`
pub(super) fn find_method(ty: &Value, name: &Value, default: &Value) -> PrimResult {
    Ok(type_arg(ty)?
        .find_method(method_name(name)?)
        .unwrap_or_else(|| default.clone()))
}

fn method_name(name: &Value) -> Result<&str, EvalError> {
    str_arg(name).map(|s| &**s)
}

impl Interpreter {
    /// `(make-type)`: a list of the new type, its tagger and its untagger.
    pub(super) fn make_type(&mut self) -> Value {
        let ty = Value::type_object(None);
        let tagger = Value::applicative(Value::type_accessor(&ty, AccessorRole::Tag));
        let untagger = Value::applicative(Value::type_accessor(&ty, AccessorRole::Untag));
        self.pairs.list([Value::Type(ty), tagger, untagger])
    }

    /// Apply a tagger or untagger.
    #[expect(
        clippy::unused_self,
        reason = "Dispatched alongside the other native combiners"
    )]
    pub(crate) fn access_type(
        &self,
        accessor: &TypeAccessor,
        args: &[Value],
    ) -> Result<Value, EvalError> {
        let [value] = args else {
            let name = match accessor.role {
                AccessorRole::Tag => "tagger",
                AccessorRole::Untag => "untagger",
            };
            return Err(arity_mismatch(name, 1, args.len()));
        };
        match accessor.role {
            AccessorRole::Tag => Ok(Value::tagged(&accessor.ty, value.clone())),
            AccessorRole::Untag => match value {
                Value::Tagged(tagged) if Heap::ptr_eq(&tagged.ty, &accessor.ty) => {
                    Ok(tagged.value.clone())
                }
                other => {
                    let expected = accessor
                        .ty
                        .label()
                        .map_or_else(|| ANONYMOUS.to_owned(), |label| label.to_string());
                    Err(type_mismatch(&expected, other.kind_name()))
                }
            },
        }
    }
}
