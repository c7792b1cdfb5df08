use super::{Check, utils};
use crate::adapter::PolicyAdapter;
use crate::message::format_list;
use crate::model::{ActionScope, AttributeSet};
use crate::policy::MatcherConfig;
use policyspec_types::{CheckKind, Outcome, Polarity};

/// Expect every named attribute to be mass-assignable, or none of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeSetCheck {
    attributes: AttributeSet,
    scope: Option<ActionScope>,
    polarity: Polarity,
}

impl AttributeSetCheck {
    pub fn new(attributes: impl Into<AttributeSet>, polarity: Polarity) -> Self {
        Self {
            attributes: attributes.into(),
            scope: None,
            polarity,
        }
    }

    /// Consult the attributes permitted for `action` instead of the unscoped list.
    pub fn for_action(mut self, action: impl Into<String>) -> Self {
        self.scope = Some(ActionScope::new(action));
        self
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn scope(&self) -> Option<&ActionScope> {
        self.scope.as_ref()
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl Check for AttributeSetCheck {
    fn evaluate<A: PolicyAdapter + ?Sized>(
        &self,
        policy: &A,
        cfg: &MatcherConfig,
    ) -> Result<Outcome, A::Error> {
        let scope = self.scope.as_ref().map(|s| s.action().to_string());
        if self.attributes.is_empty() {
            return Ok(utils::zero_items(
                CheckKind::MassAssignment,
                self.polarity,
                scope,
            ));
        }

        let permitted = match &self.scope {
            Some(scope) => policy.permitted_attributes_for_action(scope.action())?,
            None => policy.permitted_attributes()?,
        };
        let violating: Vec<String> = self
            .attributes
            .as_slice()
            .iter()
            .filter(|attr| !self.polarity.accepts(permitted.contains(attr)))
            .cloned()
            .collect();
        let subject = utils::capture_subject(policy, cfg)?;

        Ok(utils::finish(
            CheckKind::MassAssignment,
            self.polarity,
            self.attributes.as_slice(),
            violating,
            scope,
            subject,
        ))
    }

    fn description(&self) -> String {
        let mut out = format!(
            "{} mass assignment of {}",
            self.polarity.as_str(),
            format_list(self.attributes.as_slice())
        );
        if let Some(scope) = &self.scope {
            out.push_str(&format!(" for action {}", scope.action()));
        }
        out
    }
}
