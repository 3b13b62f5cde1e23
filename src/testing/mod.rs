//! Testing utilities and mock implementations
//!
//! Mock provider so agents and the task runner can be tested without any live
//! network or model dependency.

pub mod mocks;

pub use mocks::*;
