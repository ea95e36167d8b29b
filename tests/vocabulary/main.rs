//! Integration tests for Layer 1: Vocabulary
//!
//! Tests for the term store, relationship cache, and JSON format.

mod store;
