//! Builtin task implementations
//!
//! Three trivial operations: a greeting, a multiplication, and a blocking
//! sleep. Each is a pure (or pure-plus-delay) function wrapped in a
//! [`TaskHandler`] that binds parameters from the request map.

use crate::tasks::{params, TaskDescription, TaskError, TaskHandler};
use serde_json::{json, Map, Value};
use std::thread;
use std::time::Duration;

/// Message used by `greet` when none is supplied.
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Default sleep duration in seconds.
const DEFAULT_SLEEP_SECS: f64 = 1.0;

/// Format a greeting. No failure modes, no side effects.
pub fn greet(message: &str) -> String {
    format!("Greet Task: {message}")
}

/// Multiply two operands, rendering each in its natural numeric form.
pub fn compute(x: impl Into<params::Number>, y: impl Into<params::Number>) -> String {
    let x = x.into();
    let y = y.into();
    format!("Compute Task: {x} * {y} = {}", x * y)
}

/// Block the calling thread for at least `duration_sec` seconds.
///
/// No cancellation and no upper bound on the actual delay; a caller wanting a
/// bounded wait must wrap the call externally. Durations that cannot be
/// represented (negative, non-finite, overflowing) skip the delay.
pub fn sleep(duration_sec: f64) -> String {
    if let Ok(delay) = Duration::try_from_secs_f64(duration_sec) {
        thread::sleep(delay);
    }
    "Sleep Task Complete".to_string()
}

/// `greet` task: optional `message` string.
pub struct GreetTask;

impl TaskHandler for GreetTask {
    fn describe(&self) -> TaskDescription {
        TaskDescription {
            name: "greet".to_string(),
            description: "Format a greeting message".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "message": {
                        "type": "string",
                        "default": DEFAULT_GREETING
                    }
                },
                "additionalProperties": false
            }),
        }
    }

    fn execute(&self, params: &Map<String, Value>) -> Result<String, TaskError> {
        params::reject_unknown("greet", params, &["message"])?;
        let message = params::optional_str("greet", params, "message")?;
        Ok(greet(message.unwrap_or(DEFAULT_GREETING)))
    }
}

/// `compute` task: required numeric `x` and `y`.
pub struct ComputeTask;

impl TaskHandler for ComputeTask {
    fn describe(&self) -> TaskDescription {
        TaskDescription {
            name: "compute".to_string(),
            description: "Multiply two numbers".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "x": { "type": "number" },
                    "y": { "type": "number" }
                },
                "required": ["x", "y"],
                "additionalProperties": false
            }),
        }
    }

    fn execute(&self, params: &Map<String, Value>) -> Result<String, TaskError> {
        params::reject_unknown("compute", params, &["x", "y"])?;
        let x = params::require_number("compute", params, "x")?;
        let y = params::require_number("compute", params, "y")?;
        Ok(compute(x, y))
    }
}

/// `sleep` task: optional numeric `duration_sec`, default 1.0.
pub struct SleepTask;

impl TaskHandler for SleepTask {
    fn describe(&self) -> TaskDescription {
        TaskDescription {
            name: "sleep".to_string(),
            description: "Block for a number of seconds".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "duration_sec": {
                        "type": "number",
                        "default": DEFAULT_SLEEP_SECS
                    }
                },
                "additionalProperties": false
            }),
        }
    }

    fn execute(&self, params: &Map<String, Value>) -> Result<String, TaskError> {
        params::reject_unknown("sleep", params, &["duration_sec"])?;
        let duration = params::optional_number("sleep", params, "duration_sec")?
            .map(params::Number::as_f64)
            .unwrap_or(DEFAULT_SLEEP_SECS);

        // Negative, non-finite, and Duration-overflowing values are binding
        // errors, not delays.
        Duration::try_from_secs_f64(duration).map_err(|_| TaskError::InvalidNumber {
            task: "sleep".to_string(),
            param: "duration_sec".to_string(),
            value: duration.to_string(),
        })?;

        Ok(sleep(duration))
    }
}
