//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Verbose and diagnostic output helpers
pub mod logging;

/// Terminal text shaping (truncation and padding)
pub mod text;

/// Input validation and sanitization utilities
pub mod validation;
