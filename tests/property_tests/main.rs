//! Property-based tests for record invariants
//!
//! These tests generate arbitrary events and check that every formatted
//! record keeps the layout downstream collectors rely on.

mod record_invariants;
