use serde_json::Value;

/// Read-only view of an authorization policy.
///
/// Implement this once per policy type. Every method is a plain lookup; the
/// evaluator never mutates the policy and never retries a failed call.
/// Errors are returned to the caller exactly as produced here.
pub trait PolicyAdapter {
    type Error;

    /// Answer the boolean permission query named `action`.
    ///
    /// `args` are forwarded untouched from the assertion. Their arity and shape
    /// are between the test author and the implementation.
    fn query(&self, action: &str, args: &[Value]) -> Result<bool, Self::Error>;

    /// Attributes that may be mass-assigned when no action is named.
    fn permitted_attributes(&self) -> Result<Vec<String>, Self::Error>;

    /// Attributes that may be mass-assigned when authorising `action`.
    fn permitted_attributes_for_action(&self, action: &str) -> Result<Vec<String>, Self::Error>;

    /// Look up the actor under `alias`, for display only.
    fn identify(&self, alias: &str) -> Result<Value, Self::Error>;

    /// Name of the policy in failure messages.
    fn label(&self) -> String {
        short_type_name(std::any::type_name::<Self>()).to_string()
    }
}

/// `my_app::policies::PostPolicy<T>` -> `PostPolicy`.
pub(crate) fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
