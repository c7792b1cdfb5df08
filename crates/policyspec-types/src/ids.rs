//! Stable identifiers for matchers.
//!
//! A matcher ID is the snake_case name of the assertion as a test author writes it.

use crate::{CheckKind, Polarity};

pub const MATCHER_PERMIT_ACTION: &str = "permit_action";
pub const MATCHER_FORBID_ACTION: &str = "forbid_action";
pub const MATCHER_PERMIT_ACTIONS: &str = "permit_actions";
pub const MATCHER_FORBID_ACTIONS: &str = "forbid_actions";
pub const MATCHER_PERMIT_MASS_ASSIGNMENT_OF: &str = "permit_mass_assignment_of";
pub const MATCHER_FORBID_MASS_ASSIGNMENT_OF: &str = "forbid_mass_assignment_of";

pub fn matcher_id(kind: CheckKind, polarity: Polarity) -> &'static str {
    match (kind, polarity) {
        (CheckKind::Action, Polarity::Permit) => MATCHER_PERMIT_ACTION,
        (CheckKind::Action, Polarity::Forbid) => MATCHER_FORBID_ACTION,
        (CheckKind::ActionSet, Polarity::Permit) => MATCHER_PERMIT_ACTIONS,
        (CheckKind::ActionSet, Polarity::Forbid) => MATCHER_FORBID_ACTIONS,
        (CheckKind::MassAssignment, Polarity::Permit) => MATCHER_PERMIT_MASS_ASSIGNMENT_OF,
        (CheckKind::MassAssignment, Polarity::Forbid) => MATCHER_FORBID_MASS_ASSIGNMENT_OF,
    }
}

/// List all known matcher IDs.
pub fn all_matcher_ids() -> &'static [&'static str] {
    &[
        MATCHER_PERMIT_ACTION,
        MATCHER_FORBID_ACTION,
        MATCHER_PERMIT_ACTIONS,
        MATCHER_FORBID_ACTIONS,
        MATCHER_PERMIT_MASS_ASSIGNMENT_OF,
        MATCHER_FORBID_MASS_ASSIGNMENT_OF,
    ]
}
