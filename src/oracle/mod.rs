//! Pass/fail oracles
//!
//! Two judges for captured output: an exact unified diff against a baseline
//! file, and a keyword-count equivalence for checks on transformed source.
//! Each comparison is a pure function of its two inputs; nothing is shared
//! between calls.

pub mod diff;
pub mod keyword;
