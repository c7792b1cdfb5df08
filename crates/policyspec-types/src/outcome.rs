use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Stable schema identifier for serialized outcomes.
pub const SCHEMA_OUTCOME_V1: &str = "policyspec.outcome.v1";

/// Whether an assertion expects its items to be allowed or disallowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Permit,
    Forbid,
}

impl Polarity {
    /// Does an item the policy `allowed` (or not) satisfy this polarity?
    pub fn accepts(self, allowed: bool) -> bool {
        match self {
            Polarity::Permit => allowed,
            Polarity::Forbid => !allowed,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Polarity::Permit => Polarity::Forbid,
            Polarity::Forbid => Polarity::Permit,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Permit => "permit",
            Polarity::Forbid => "forbid",
        }
    }
}

/// Positive (`to`) or negated (`not_to`) use of an assertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    Positive,
    Negated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Action,
    ActionSet,
    MassAssignment,
}

/// Display identity of the policy that was checked, captured at evaluation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Subject {
    pub label: String,
    /// Whatever the policy returned for the configured display alias.
    #[serde(default)]
    pub actor: JsonValue,
}

/// The result of evaluating one assertion against one policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Outcome {
    pub kind: CheckKind,
    pub polarity: Polarity,
    pub passed: bool,

    /// Items named by the assertion, in the order given.
    pub requested: Vec<String>,

    /// Ordered subsequence of `requested` that disagreed with `polarity`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violating: Vec<String>,

    /// Action whose permitted-attribute list was consulted, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Absent when the assertion named no items and the policy was never consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
}

impl Outcome {
    pub fn matcher_id(&self) -> &'static str {
        ids::matcher_id(self.kind, self.polarity)
    }

    /// An assertion over zero items. It never passes.
    pub fn is_degenerate(&self) -> bool {
        self.requested.is_empty()
    }

    /// Requested items that agreed with `polarity`, in order.
    pub fn conforming(&self) -> Vec<&str> {
        self.requested
            .iter()
            .filter(|item| !self.violating.contains(item))
            .map(String::as_str)
            .collect()
    }

    /// Whether the assertion, used in `form`, is satisfied.
    pub fn holds(&self, form: Form) -> bool {
        match form {
            Form::Positive => self.passed,
            Form::Negated => !self.passed,
        }
    }
}
