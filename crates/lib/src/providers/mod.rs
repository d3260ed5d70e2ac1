//! # Providers
//!
//! External generative-model services the assistant can call.

pub mod ai;
pub mod factory;
