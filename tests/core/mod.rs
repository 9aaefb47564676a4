//! Core module tests for non-parser functionality
//!
//! Tests for:
//! - Session pipeline (fetch, normalize, filter, render)
//! - Launch parameters
//! - Settings loading

pub mod pipeline_tests;
