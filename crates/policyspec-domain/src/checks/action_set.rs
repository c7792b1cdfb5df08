use super::{Check, utils};
use crate::adapter::PolicyAdapter;
use crate::message::format_list;
use crate::model::ActionSet;
use crate::policy::MatcherConfig;
use policyspec_types::{CheckKind, Outcome, Polarity};

/// Expect every named permission query to share one polarity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSetCheck {
    actions: ActionSet,
    polarity: Polarity,
}

impl ActionSetCheck {
    pub fn new(actions: impl Into<ActionSet>, polarity: Polarity) -> Self {
        Self {
            actions: actions.into(),
            polarity,
        }
    }

    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl Check for ActionSetCheck {
    fn evaluate<A: PolicyAdapter + ?Sized>(
        &self,
        policy: &A,
        cfg: &MatcherConfig,
    ) -> Result<Outcome, A::Error> {
        if self.actions.is_empty() {
            return Ok(utils::zero_items(CheckKind::ActionSet, self.polarity, None));
        }

        let mut violating = Vec::new();
        for action in self.actions.as_slice() {
            if !self.polarity.accepts(policy.query(action, &[])?) {
                violating.push(action.clone());
            }
        }
        let subject = utils::capture_subject(policy, cfg)?;

        Ok(utils::finish(
            CheckKind::ActionSet,
            self.polarity,
            self.actions.as_slice(),
            violating,
            None,
            subject,
        ))
    }

    fn description(&self) -> String {
        format!(
            "{} actions {}",
            self.polarity.as_str(),
            format_list(self.actions.as_slice())
        )
    }
}
