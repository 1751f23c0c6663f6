//! Vectors and hashtables.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use wat_ir::errors::{index_out_of_bounds, type_mismatch};
use wat_ir::value::{IdentityTable, StringTable};
use wat_ir::{EvalError, Heap, Value};

use super::{int_arg, str_arg, PrimResult};

type VectorCell = std::cell::RefCell<Vec<Value>>;

fn vector_arg(value: &Value) -> Result<&Heap<VectorCell>, EvalError> {
    match value {
        Value::Vector(items) => Ok(items),
        other => Err(type_mismatch("vector", other.kind_name())),
    }
}

fn index_arg(index: &Value, len: usize) -> Result<usize, EvalError> {
    let index = int_arg(index)?;
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or_else(|| index_out_of_bounds(index, len))
}

pub(super) fn vector_ref(vector: &Value, index: &Value) -> PrimResult {
    let items = vector_arg(vector)?.borrow();
    let i = index_arg(index, items.len())?;
    Ok(items[i].clone())
}

/// `(vector-set! vector index value)` returns `value`.
pub(super) fn vector_set(vector: &Value, index: &Value, value: &Value) -> PrimResult {
    let mut items = vector_arg(vector)?.borrow_mut();
    let i = index_arg(index, items.len())?;
    items[i] = value.clone();
    Ok(value.clone())
}

pub(super) fn vector_length(vector: &Value) -> PrimResult {
    let len = vector_arg(vector)?.borrow().len();
    i64::try_from(len)
        .map(Value::Int)
        .map_err(|_| EvalError::new("vector length does not fit in an integer"))
}

fn identity_table_arg(value: &Value) -> Result<&Heap<IdentityTable>, EvalError> {
    match value {
        Value::IdentityTable(table) => Ok(table),
        other => Err(type_mismatch("identity hashtable", other.kind_name())),
    }
}

fn string_table_arg(value: &Value) -> Result<&Heap<StringTable>, EvalError> {
    match value {
        Value::StringTable(table) => Ok(table),
        other => Err(type_mismatch("string hashtable", other.kind_name())),
    }
}

pub(super) fn identity_table_put(table: &Value, key: &Value, value: &Value) -> PrimResult {
    identity_table_arg(table)?.put(key, value.clone());
    Ok(value.clone())
}

/// `(identity-hashtable-get table key default)`
pub(super) fn identity_table_get(table: &Value, key: &Value, default: &Value) -> PrimResult {
    Ok(identity_table_arg(table)?
        .get(key)
        .unwrap_or_else(|| default.clone()))
}

pub(super) fn string_table_put(table: &Value, key: &Value, value: &Value) -> PrimResult {
    string_table_arg(table)?.put(str_arg(key)?, value.clone());
    Ok(value.clone())
}

/// `(string-hashtable-get table key default)`
pub(super) fn string_table_get(table: &Value, key: &Value, default: &Value) -> PrimResult {
    Ok(string_table_arg(table)?
        .get(str_arg(key)?)
        .unwrap_or_else(|| default.clone()))
}

/// Non-negative hash of a value's identity; equal for `eq?` values.
pub(super) fn identity_hash_code(value: &Value) -> Value {
    let mut hasher = FxHasher::default();
    value.identity().hash(&mut hasher);
    let code = hasher.finish() >> 1;
    Value::Int(i64::try_from(code).unwrap_or(i64::MAX))
}
