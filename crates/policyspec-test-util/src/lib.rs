//! Shared test utilities for the policyspec workspace.
//!
//! [`StubPolicy`] stands in for a real policy: each query, attribute list and
//! actor is stubbed by name. Anything not stubbed fails the way a policy
//! without that method would, with a [`StubError`].

use policyspec_domain::PolicyAdapter;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StubError {
    #[error("{label} has no query named {action}")]
    MissingQuery { label: String, action: String },

    #[error("{label} does not stub permitted attributes")]
    MissingPermittedAttributes { label: String },

    #[error("{label} does not stub permitted attributes for {action}")]
    MissingPermittedAttributesFor { label: String, action: String },

    #[error("{label} has no actor under alias {alias}")]
    MissingActor { label: String, alias: String },

    /// Raised by a stubbed query body, e.g. on unexpected arguments.
    #[error("{action} rejected its arguments: {reason}")]
    Rejected { action: String, reason: String },
}

type QueryFn = dyn Fn(&[Value]) -> Result<bool, String> + Send + Sync;

#[derive(Clone)]
enum Answer {
    Fixed(bool),
    Computed(Arc<QueryFn>),
}

#[derive(Clone)]
pub struct StubPolicy {
    label: String,
    queries: BTreeMap<String, Answer>,
    permitted: Option<Vec<String>>,
    permitted_for: BTreeMap<String, Vec<String>>,
    actors: BTreeMap<String, Value>,
    strict_actors: bool,
}

impl StubPolicy {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            queries: BTreeMap::new(),
            permitted: None,
            permitted_for: BTreeMap::new(),
            actors: BTreeMap::new(),
            strict_actors: false,
        }
    }

    /// Stub `action` with a fixed answer, whatever the arguments.
    pub fn allow(self, action: &str, allowed: bool) -> Self {
        self.answer(action, Answer::Fixed(allowed))
    }

    /// Stub `action` with a body that sees the forwarded arguments.
    ///
    /// Returning `Err(reason)` surfaces as [`StubError::Rejected`].
    pub fn allow_with<F>(self, action: &str, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<bool, String> + Send + Sync + 'static,
    {
        self.answer(action, Answer::Computed(Arc::new(body)))
    }

    pub fn permitted<S: AsRef<str>>(mut self, attributes: &[S]) -> Self {
        self.permitted = Some(to_strings(attributes));
        self
    }

    pub fn permitted_for<S: AsRef<str>>(mut self, action: &str, attributes: &[S]) -> Self {
        self.permitted_for
            .insert(action.to_string(), to_strings(attributes));
        self
    }

    pub fn actor(mut self, alias: &str, actor: impl Into<Value>) -> Self {
        self.actors.insert(alias.to_string(), actor.into());
        self
    }

    /// Fail actor lookups under aliases that were never stubbed.
    pub fn strict_actors(mut self) -> Self {
        self.strict_actors = true;
        self
    }

    fn answer(mut self, action: &str, answer: Answer) -> Self {
        self.queries.insert(action.to_string(), answer);
        self
    }
}

impl fmt::Debug for StubPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubPolicy")
            .field("label", &self.label)
            .field("queries", &self.queries.keys().collect::<Vec<_>>())
            .field("permitted", &self.permitted)
            .field("permitted_for", &self.permitted_for)
            .field("actors", &self.actors)
            .field("strict_actors", &self.strict_actors)
            .finish()
    }
}

impl PolicyAdapter for StubPolicy {
    type Error = StubError;

    fn query(&self, action: &str, args: &[Value]) -> Result<bool, StubError> {
        match self.queries.get(action) {
            Some(Answer::Fixed(allowed)) => Ok(*allowed),
            Some(Answer::Computed(body)) => body(args).map_err(|reason| StubError::Rejected {
                action: action.to_string(),
                reason,
            }),
            None => Err(StubError::MissingQuery {
                label: self.label.clone(),
                action: action.to_string(),
            }),
        }
    }

    fn permitted_attributes(&self) -> Result<Vec<String>, StubError> {
        self.permitted
            .clone()
            .ok_or_else(|| StubError::MissingPermittedAttributes {
                label: self.label.clone(),
            })
    }

    fn permitted_attributes_for_action(&self, action: &str) -> Result<Vec<String>, StubError> {
        self.permitted_for.get(action).cloned().ok_or_else(|| {
            StubError::MissingPermittedAttributesFor {
                label: self.label.clone(),
                action: action.to_string(),
            }
        })
    }

    /// An actor that was never stubbed shows up as `null`, unless
    /// [`StubPolicy::strict_actors`] was set.
    fn identify(&self, alias: &str) -> Result<Value, StubError> {
        match self.actors.get(alias) {
            Some(actor) => Ok(actor.clone()),
            None if self.strict_actors => Err(StubError::MissingActor {
                label: self.label.clone(),
                alias: alias.to_string(),
            }),
            None => Ok(Value::Null),
        }
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

fn to_strings<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|s| s.as_ref().to_string()).collect()
}
