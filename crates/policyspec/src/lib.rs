//! Public facade over policyspec: matcher constructors, the expectation API,
//! and re-exports of the evaluation types.
//!
//! ```ignore
//! use policyspec::{expect, permit_actions, forbid_mass_assignment_of};
//!
//! expect(&policy).to(&permit_actions(["show", "update"]))?;
//! expect(&policy).not_to(&forbid_mass_assignment_of("title").for_action("create"))?;
//! ```

#![forbid(unsafe_code)]

mod expect;
mod matchers;

pub use expect::{Expectation, ExpectationError, expect};
pub use matchers::{
    forbid_action, forbid_actions, forbid_mass_assignment_of, permit_action, permit_actions,
    permit_mass_assignment_of,
};

pub use policyspec_domain::{
    ActionCheck, ActionScope, ActionSet, ActionSetCheck, Assertion, AttributeSet,
    AttributeSetCheck, Check, DEFAULT_DISPLAY_ALIAS, EvaluationReport, MatcherConfig,
    OutcomeCounts, PolicyAdapter, evaluate, message,
};
pub use policyspec_settings::{Overrides, PolicyspecConfigV1, parse_config_toml, resolve_config};
pub use policyspec_types::{CheckKind, Form, Outcome, Polarity, Subject, ids};
