//! Engine module - The search pipeline
//!
//! Provides:
//! - wildcard: glob-to-regex translation and directory expansion
//! - search: file-set resolution and line-by-line scanning

pub mod search;
pub mod wildcard;
