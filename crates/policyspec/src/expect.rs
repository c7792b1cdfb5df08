use policyspec_domain::{Check, MatcherConfig, PolicyAdapter, message};
use policyspec_types::{Form, Outcome};

#[derive(Debug, thiserror::Error)]
pub enum ExpectationError<E> {
    /// The assertion did not hold; `message` says which items were at fault.
    #[error("{message}")]
    Unmet {
        message: String,
        outcome: Box<Outcome>,
    },

    /// The policy itself failed to answer. Passed through untouched.
    #[error("policy adapter failed: {0}")]
    Adapter(E),
}

impl<E> ExpectationError<E> {
    pub fn message(&self) -> Option<&str> {
        match self {
            ExpectationError::Unmet { message, .. } => Some(message),
            ExpectationError::Adapter(_) => None,
        }
    }
}

/// Assertions about one policy.
pub struct Expectation<'a, A: ?Sized> {
    policy: &'a A,
    config: MatcherConfig,
}

pub fn expect<A: PolicyAdapter + ?Sized>(policy: &A) -> Expectation<'_, A> {
    Expectation {
        policy,
        config: MatcherConfig::default(),
    }
}

impl<A: PolicyAdapter + ?Sized> Expectation<'_, A> {
    pub fn with_config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_display_alias(self, alias: impl Into<String>) -> Self {
        self.with_config(MatcherConfig::with_display_alias(alias))
    }

    /// Require `check` to hold.
    pub fn to<C: Check>(&self, check: &C) -> Result<Outcome, ExpectationError<A::Error>> {
        self.run(check, Form::Positive)
    }

    /// Require `check` not to hold.
    ///
    /// A check naming no items never holds, so negating it always succeeds.
    pub fn not_to<C: Check>(&self, check: &C) -> Result<Outcome, ExpectationError<A::Error>> {
        self.run(check, Form::Negated)
    }

    fn run<C: Check>(&self, check: &C, form: Form) -> Result<Outcome, ExpectationError<A::Error>> {
        let outcome = check
            .evaluate(self.policy, &self.config)
            .map_err(ExpectationError::Adapter)?;
        if outcome.holds(form) {
            return Ok(outcome);
        }
        Err(ExpectationError::Unmet {
            message: message::render(&outcome, form),
            outcome: Box::new(outcome),
        })
    }
}
