//! Parameter binding helpers for task handlers
//!
//! Task parameters arrive as a JSON object. The helpers here pull typed values
//! out of that object and report binding failures as [`TaskError`]s carrying
//! the task and parameter names. Numbers keep the integer/float distinction of
//! their JSON source so results render in the operand's natural form.

use crate::tasks::TaskError;
use serde_json::{Map, Value};
use std::fmt;
use std::ops::Mul;

/// A task parameter number, preserving whether it was an integer or a float.
///
/// An integer renders without a fraction (`35`); a float always renders with
/// one, even when integer-valued (`7.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Coerce a JSON value into a number.
    ///
    /// JSON numbers keep their kind; numeric strings are parsed (integer form
    /// first, then float). Anything else is an `InvalidNumber` error.
    pub fn coerce(task: &str, param: &str, value: &Value) -> Result<Self, TaskError> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Number::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Number::Float(f))
                } else {
                    Err(invalid_number(task, param, value))
                }
            }
            Value::String(s) => {
                if let Ok(i) = s.trim().parse::<i64>() {
                    Ok(Number::Int(i))
                } else if let Ok(f) = s.trim().parse::<f64>() {
                    Ok(Number::Float(f))
                } else {
                    Err(invalid_number(task, param, value))
                }
            }
            _ => Err(invalid_number(task, param, value)),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

fn invalid_number(task: &str, param: &str, value: &Value) -> TaskError {
    TaskError::InvalidNumber {
        task: task.to_string(),
        param: param.to_string(),
        value: value.to_string(),
    }
}

impl Mul for Number {
    type Output = Number;

    /// Integer × integer stays an integer; any float operand makes the result
    /// a float. Integer overflow promotes to float instead of wrapping.
    fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_mul(b) {
                Some(product) => Number::Int(product),
                None => Number::Float(a as f64 * b as f64),
            },
            (a, b) => Number::Float(a.as_f64() * b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<i32> for Number {
    fn from(i: i32) -> Self {
        Number::Int(i64::from(i))
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

/// Reject parameters the task does not accept.
///
/// Mirrors strict keyword binding: an extra key is a hard error even when all
/// required parameters are present.
pub fn reject_unknown(
    task: &str,
    params: &Map<String, Value>,
    accepted: &[&str],
) -> Result<(), TaskError> {
    for key in params.keys() {
        if !accepted.contains(&key.as_str()) {
            return Err(TaskError::UnexpectedParameter {
                task: task.to_string(),
                param: key.clone(),
            });
        }
    }
    Ok(())
}

/// Required numeric parameter.
pub fn require_number(
    task: &str,
    params: &Map<String, Value>,
    param: &str,
) -> Result<Number, TaskError> {
    let value = params.get(param).ok_or_else(|| TaskError::MissingParameter {
        task: task.to_string(),
        param: param.to_string(),
    })?;
    Number::coerce(task, param, value)
}

/// Optional numeric parameter; `None` when absent.
pub fn optional_number(
    task: &str,
    params: &Map<String, Value>,
    param: &str,
) -> Result<Option<Number>, TaskError> {
    params
        .get(param)
        .map(|value| Number::coerce(task, param, value))
        .transpose()
}

/// Optional string parameter; `None` when absent.
pub fn optional_str<'a>(
    task: &str,
    params: &'a Map<String, Value>,
    param: &str,
) -> Result<Option<&'a str>, TaskError> {
    match params.get(param) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(TaskError::InvalidString {
            task: task.to_string(),
            param: param.to_string(),
            value: other.to_string(),
        }),
    }
}
