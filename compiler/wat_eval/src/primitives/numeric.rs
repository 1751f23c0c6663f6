//! Numeric primitives.
//!
//! Integers are checked: overflow and integer division by zero are errors.
//! Mixed operands promote to float. Integer `/` stays integral only when the
//! division is exact.

use std::cmp::Ordering;

use wat_ir::errors::{division_by_zero, integer_overflow, type_mismatch};
use wat_ir::{EvalError, Value};

use super::{str_arg, PrimResult};

#[derive(Copy, Clone)]
enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    fn from_value(value: &Value) -> Result<Self, EvalError> {
        match value {
            Value::Int(n) => Ok(Num::Int(*n)),
            Value::Float(x) => Ok(Num::Float(*x)),
            other => Err(type_mismatch("number", other.kind_name())),
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "promotion to float is lossy by definition"
    )]
    fn to_float(self) -> f64 {
        match self {
            Num::Int(n) => n as f64,
            Num::Float(x) => x,
        }
    }
}

/// Apply `int_op` when both operands are integers, `float_op` otherwise.
fn arith(
    a: &Value,
    b: &Value,
    int_op: impl FnOnce(i64, i64) -> PrimResult,
    float_op: impl FnOnce(f64, f64) -> f64,
) -> PrimResult {
    match (Num::from_value(a)?, Num::from_value(b)?) {
        (Num::Int(x), Num::Int(y)) => int_op(x, y),
        (x, y) => Ok(Value::Float(float_op(x.to_float(), y.to_float()))),
    }
}

fn compare(a: &Value, b: &Value) -> Result<Option<Ordering>, EvalError> {
    Ok(match (Num::from_value(a)?, Num::from_value(b)?) {
        (Num::Int(x), Num::Int(y)) => Some(x.cmp(&y)),
        (x, y) => x.to_float().partial_cmp(&y.to_float()),
    })
}

pub(super) fn add(a: &Value, b: &Value) -> PrimResult {
    arith(
        a,
        b,
        |x, y| {
            x.checked_add(y)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("addition"))
        },
        |x, y| x + y,
    )
}

pub(super) fn sub(a: &Value, b: &Value) -> PrimResult {
    arith(
        a,
        b,
        |x, y| {
            x.checked_sub(y)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("subtraction"))
        },
        |x, y| x - y,
    )
}

pub(super) fn mul(a: &Value, b: &Value) -> PrimResult {
    arith(
        a,
        b,
        |x, y| {
            x.checked_mul(y)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("multiplication"))
        },
        |x, y| x * y,
    )
}

pub(super) fn div(a: &Value, b: &Value) -> PrimResult {
    arith(
        a,
        b,
        |x, y| {
            if y == 0 {
                return Err(division_by_zero());
            }
            if x.checked_rem(y) == Some(0) {
                x.checked_div(y)
                    .map(Value::Int)
                    .ok_or_else(|| integer_overflow("division"))
            } else {
                Ok(Value::Float(Num::Int(x).to_float() / Num::Int(y).to_float()))
            }
        },
        |x, y| x / y,
    )
}

/// Remainder; the result takes the sign of the dividend.
pub(super) fn rem(a: &Value, b: &Value) -> PrimResult {
    arith(
        a,
        b,
        |x, y| {
            if y == 0 {
                Err(division_by_zero())
            } else {
                Ok(Value::Int(x.wrapping_rem(y)))
            }
        },
        |x, y| x % y,
    )
}

pub(super) fn num_eq(a: &Value, b: &Value) -> PrimResult {
    Ok((compare(a, b)? == Some(Ordering::Equal)).into())
}

pub(super) fn num_lt(a: &Value, b: &Value) -> PrimResult {
    Ok((compare(a, b)? == Some(Ordering::Less)).into())
}

pub(super) fn string_to_number(text: &Value) -> PrimResult {
    let text = str_arg(text)?;
    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(Value::Int(n));
    }
    trimmed
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| EvalError::new(format!("not a number: {:?}", &**text)))
}

pub(super) fn number_to_string(number: &Value) -> PrimResult {
    let text = match Num::from_value(number)? {
        Num::Int(n) => n.to_string(),
        Num::Float(x) => format!("{x:?}"),
    };
    Ok(Value::string(&text))
}
