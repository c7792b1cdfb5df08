use super::{Check, utils};
use crate::adapter::PolicyAdapter;
use crate::message::format_list;
use crate::policy::MatcherConfig;
use policyspec_types::{CheckKind, Outcome, Polarity};
use serde_json::Value;

/// Expect a single permission query to be permitted or forbidden.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionCheck {
    action: String,
    args: Vec<Value>,
    polarity: Polarity,
}

impl ActionCheck {
    pub fn new(action: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            action: action.into(),
            args: Vec::new(),
            polarity,
        }
    }

    /// Append an argument forwarded to the query.
    pub fn with_arg(mut self, arg: impl Into<Value>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl Check for ActionCheck {
    fn evaluate<A: PolicyAdapter + ?Sized>(
        &self,
        policy: &A,
        cfg: &MatcherConfig,
    ) -> Result<Outcome, A::Error> {
        let allowed = policy.query(&self.action, &self.args)?;
        let violating = if self.polarity.accepts(allowed) {
            Vec::new()
        } else {
            vec![self.action.clone()]
        };
        let subject = utils::capture_subject(policy, cfg)?;

        Ok(utils::finish(
            CheckKind::Action,
            self.polarity,
            std::slice::from_ref(&self.action),
            violating,
            None,
            subject,
        ))
    }

    fn description(&self) -> String {
        let mut out = format!("{} action {}", self.polarity.as_str(), self.action);
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(Value::to_string).collect();
            out.push_str(&format!(" with arguments {}", format_list(&args)));
        }
        out
    }
}
