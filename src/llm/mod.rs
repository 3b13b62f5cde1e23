//! LLM provider abstraction layer
//!
//! Provider-agnostic interface for submitting a prompt and receiving response
//! text, with one concrete OpenAI-compatible backend. Everything past this
//! seam (model invocation, prompt handling) is an opaque external service.

pub mod provider;
pub mod providers;

pub use provider::*;
pub use providers::*;
