use crate::adapter::PolicyAdapter;
use crate::policy::MatcherConfig;
use policyspec_types::{CheckKind, Outcome, Polarity, Subject};

pub fn capture_subject<A: PolicyAdapter + ?Sized>(
    policy: &A,
    cfg: &MatcherConfig,
) -> Result<Subject, A::Error> {
    Ok(Subject {
        label: policy.label(),
        actor: policy.identify(&cfg.display_alias)?,
    })
}

/// Outcome of an assertion that names nothing. It fails without consulting the policy.
pub fn zero_items(kind: CheckKind, polarity: Polarity, scope: Option<String>) -> Outcome {
    let outcome = Outcome {
        kind,
        polarity,
        passed: false,
        requested: Vec::new(),
        violating: Vec::new(),
        scope,
        subject: None,
    };
    tracing::warn!(
        matcher = outcome.matcher_id(),
        "assertion names no items and can never pass"
    );
    outcome
}

pub fn finish(
    kind: CheckKind,
    polarity: Polarity,
    requested: &[String],
    violating: Vec<String>,
    scope: Option<String>,
    subject: Subject,
) -> Outcome {
    tracing::debug!(
        matcher = policyspec_types::ids::matcher_id(kind, polarity),
        policy = %subject.label,
        passed = violating.is_empty(),
        requested = requested.len(),
        violating = ?violating,
        "evaluated policy assertion"
    );
    Outcome {
        kind,
        polarity,
        passed: violating.is_empty(),
        requested: requested.to_vec(),
        violating,
        scope,
        subject: Some(subject),
    }
}
