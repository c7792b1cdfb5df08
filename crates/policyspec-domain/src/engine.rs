use crate::adapter::PolicyAdapter;
use crate::checks::{ActionCheck, ActionSetCheck, AttributeSetCheck, Check};
use crate::policy::MatcherConfig;
use crate::report::{EvaluationReport, OutcomeCounts};
use policyspec_types::Outcome;

/// Any of the assertions this crate knows how to evaluate.
#[derive(Clone, Debug, PartialEq)]
pub enum Assertion {
    Action(ActionCheck),
    ActionSet(ActionSetCheck),
    MassAssignment(AttributeSetCheck),
}

impl Check for Assertion {
    fn evaluate<A: PolicyAdapter + ?Sized>(
        &self,
        policy: &A,
        cfg: &MatcherConfig,
    ) -> Result<Outcome, A::Error> {
        match self {
            Assertion::Action(c) => c.evaluate(policy, cfg),
            Assertion::ActionSet(c) => c.evaluate(policy, cfg),
            Assertion::MassAssignment(c) => c.evaluate(policy, cfg),
        }
    }

    fn description(&self) -> String {
        match self {
            Assertion::Action(c) => c.description(),
            Assertion::ActionSet(c) => c.description(),
            Assertion::MassAssignment(c) => c.description(),
        }
    }
}

impl From<ActionCheck> for Assertion {
    fn from(c: ActionCheck) -> Self {
        Assertion::Action(c)
    }
}

impl From<ActionSetCheck> for Assertion {
    fn from(c: ActionSetCheck) -> Self {
        Assertion::ActionSet(c)
    }
}

impl From<AttributeSetCheck> for Assertion {
    fn from(c: AttributeSetCheck) -> Self {
        Assertion::MassAssignment(c)
    }
}

/// Evaluate `assertions` in order against one policy.
///
/// Stops at the first adapter error.
pub fn evaluate<A: PolicyAdapter + ?Sized>(
    policy: &A,
    assertions: &[Assertion],
    cfg: &MatcherConfig,
) -> Result<EvaluationReport, A::Error> {
    let mut outcomes = Vec::with_capacity(assertions.len());
    for assertion in assertions {
        outcomes.push(assertion.evaluate(policy, cfg)?);
    }
    let counts = OutcomeCounts::from_outcomes(&outcomes);

    Ok(EvaluationReport { outcomes, counts })
}
