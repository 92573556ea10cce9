//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Search data model (SearchRequest, MatchRecord, SearchOutcome)
//! - Line matching primitives (case normalization, substring test)
//! - Rendering functions for different output formats

pub mod matcher;
pub mod model;
pub mod render;
