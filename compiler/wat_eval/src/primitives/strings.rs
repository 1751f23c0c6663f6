//! String and symbol primitives.

use wat_ir::Value;

use super::{str_arg, symbol_arg, PrimResult};
use crate::interpreter::Interpreter;

pub(super) fn str_eq(a: &Value, b: &Value) -> PrimResult {
    Ok((**str_arg(a)? == **str_arg(b)?).into())
}

pub(super) fn strcat(args: &[Value]) -> PrimResult {
    let mut out = String::new();
    for arg in args {
        out.push_str(str_arg(arg)?);
    }
    Ok(Value::string(&out))
}

impl Interpreter {
    pub(super) fn string_to_symbol(&self, text: &Value) -> PrimResult {
        Ok(Value::Symbol(self.interner.intern(str_arg(text)?)))
    }

    pub(super) fn symbol_to_string(&self, symbol: &Value) -> PrimResult {
        let name = symbol_arg(symbol)?;
        Ok(Value::string(self.interner.lookup(name)))
    }
}
