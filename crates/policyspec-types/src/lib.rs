//! Stable DTOs and IDs used across the policyspec workspace.
//!
//! This crate is intentionally boring:
//! - data types for the evaluated outcome of an assertion
//! - stable string IDs for matchers

#![forbid(unsafe_code)]

pub mod ids;
pub mod outcome;

pub use outcome::{CheckKind, Form, Outcome, Polarity, SCHEMA_OUTCOME_V1, Subject};
