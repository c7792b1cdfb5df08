//! Failure messages for evaluated outcomes.
//!
//! Rendering is pure: everything shown was captured when the outcome was
//! evaluated, so the policy is never consulted again here.

use policyspec_types::{CheckKind, Form, Outcome, Polarity};
use serde_json::Value;

/// Render the message shown when `outcome`, used in `form`, does not hold.
pub fn render(outcome: &Outcome, form: Form) -> String {
    if outcome.is_degenerate() {
        return zero_items_message(outcome);
    }

    let (label, actor) = match &outcome.subject {
        Some(subject) => (subject.label.as_str(), format_actor(&subject.actor)),
        None => ("policy", format_actor(&Value::Null)),
    };
    let listed: Vec<&str> = match form {
        Form::Positive => outcome.violating.iter().map(String::as_str).collect(),
        Form::Negated => outcome.conforming(),
    };

    match outcome.kind {
        CheckKind::Action => {
            let action = outcome.requested.join(", ");
            format!(
                "{label} does not {} {action} for {actor}.",
                expected_verb(outcome.polarity, form)
            )
        }
        CheckKind::ActionSet => {
            let (verb, past) = match (outcome.polarity, form) {
                (Polarity::Permit, Form::Positive) | (Polarity::Forbid, Form::Negated) => {
                    ("permit", "forbade")
                }
                (Polarity::Forbid, Form::Positive) | (Polarity::Permit, Form::Negated) => {
                    ("forbid", "allowed")
                }
            };
            format!(
                "{label} expected to {verb} {}, but {past} {} for {actor}.",
                format_list(&outcome.requested),
                format_list(&listed)
            )
        }
        CheckKind::MassAssignment => {
            let (verb, past) = match (outcome.polarity, form) {
                (Polarity::Permit, Form::Positive) => ("permit", "forbade"),
                (Polarity::Permit, Form::Negated) => ("forbid", "permitted"),
                (Polarity::Forbid, Form::Positive) => ("forbid", "allowed"),
                (Polarity::Forbid, Form::Negated) => ("permit", "forbade"),
            };
            let scope = outcome
                .scope
                .as_deref()
                .map(|action| format!(" when authorising the {action} action"))
                .unwrap_or_default();
            format!(
                "{label} expected to {verb} the mass assignment of the attributes {}{scope}, \
                 but {past} the mass assignment of the attributes {} for {actor}.",
                format_list(&outcome.requested),
                format_list(&listed)
            )
        }
    }
}

/// Fixed message for an assertion that named no items.
pub fn zero_items_message(outcome: &Outcome) -> String {
    let noun = match outcome.kind {
        CheckKind::Action | CheckKind::ActionSet => "action",
        CheckKind::MassAssignment => "attribute",
    };
    format!(
        "At least one {noun} must be specified when using the {} matcher.",
        outcome.matcher_id()
    )
}

fn expected_verb(polarity: Polarity, form: Form) -> &'static str {
    match form {
        Form::Positive => polarity.as_str(),
        Form::Negated => polarity.opposite().as_str(),
    }
}

/// `[update, delete]`
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    let joined: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    format!("[{}]", joined.join(", "))
}

/// Actors are shown as compact JSON, so strings keep their quotes.
fn format_actor(actor: &Value) -> String {
    actor.to_string()
}
