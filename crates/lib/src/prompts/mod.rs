//! # Prompt Modules
//!
//! Prompt text lives in `support`; `builder` assembles a complete prompt for one request.

pub mod builder;
pub mod support;

pub use builder::{build_prompt, build_prompt_for_confidence, language_name};
