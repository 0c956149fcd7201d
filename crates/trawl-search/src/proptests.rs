//! Property-based tests for scope accumulation and paths.
