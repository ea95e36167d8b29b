//! Integration tests for Layer 3: Engine
//!
//! Tests for substitution, resolution, and the review model, plus the
//! detect-choose-export scenario end to end.

mod review;
mod scenario;
mod substitution;
