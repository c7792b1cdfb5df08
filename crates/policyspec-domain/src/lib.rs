//! Pure assertion evaluation (no IO).
//!
//! Input: a policy reached through [`PolicyAdapter`] and an assertion built by the caller.
//! Output: an [`Outcome`](policyspec_types::Outcome) and, on demand, its failure message.

#![forbid(unsafe_code)]

pub mod adapter;
pub mod checks;
pub mod message;
pub mod model;
pub mod policy;
pub mod report;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use adapter::PolicyAdapter;
pub use checks::{ActionCheck, ActionSetCheck, AttributeSetCheck, Check};
pub use engine::{Assertion, evaluate};
pub use model::{ActionScope, ActionSet, AttributeSet};
pub use policy::{DEFAULT_DISPLAY_ALIAS, MatcherConfig};
pub use report::{EvaluationReport, OutcomeCounts};
