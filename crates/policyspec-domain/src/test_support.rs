use crate::adapter::PolicyAdapter;
use serde_json::Value;
use std::collections::BTreeMap;

/// Table-driven policy for unit tests. Lookups that were never configured fail.
#[derive(Clone, Debug, Default)]
pub struct TablePolicy {
    pub queries: BTreeMap<String, bool>,
    pub permitted: Option<Vec<String>>,
    pub permitted_for: BTreeMap<String, Vec<String>>,
    pub actors: BTreeMap<String, Value>,
}

impl TablePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, action: &str, allowed: bool) -> Self {
        self.queries.insert(action.to_string(), allowed);
        self
    }

    pub fn with_permitted(mut self, attributes: &[&str]) -> Self {
        self.permitted = Some(to_strings(attributes));
        self
    }

    pub fn with_permitted_for(mut self, action: &str, attributes: &[&str]) -> Self {
        self.permitted_for
            .insert(action.to_string(), to_strings(attributes));
        self
    }

    pub fn with_actor(mut self, alias: &str, actor: Value) -> Self {
        self.actors.insert(alias.to_string(), actor);
        self
    }
}

impl PolicyAdapter for TablePolicy {
    type Error = String;

    fn query(&self, action: &str, _args: &[Value]) -> Result<bool, String> {
        self.queries
            .get(action)
            .copied()
            .ok_or_else(|| format!("no query named {action}"))
    }

    fn permitted_attributes(&self) -> Result<Vec<String>, String> {
        self.permitted
            .clone()
            .ok_or_else(|| "no permitted attributes".to_string())
    }

    fn permitted_attributes_for_action(&self, action: &str) -> Result<Vec<String>, String> {
        self.permitted_for
            .get(action)
            .cloned()
            .ok_or_else(|| format!("no permitted attributes for {action}"))
    }

    fn identify(&self, alias: &str) -> Result<Value, String> {
        Ok(self.actors.get(alias).cloned().unwrap_or(Value::Null))
    }
}

/// Fails every lookup. Evaluating against it proves the policy was never consulted.
pub struct UnreachablePolicy;

impl PolicyAdapter for UnreachablePolicy {
    type Error = String;

    fn query(&self, action: &str, _args: &[Value]) -> Result<bool, String> {
        Err(format!("unexpected query {action}"))
    }

    fn permitted_attributes(&self) -> Result<Vec<String>, String> {
        Err("unexpected permitted_attributes".to_string())
    }

    fn permitted_attributes_for_action(&self, action: &str) -> Result<Vec<String>, String> {
        Err(format!("unexpected permitted_attributes_for_action {action}"))
    }

    fn identify(&self, alias: &str) -> Result<Value, String> {
        Err(format!("unexpected identify {alias}"))
    }
}

pub fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
