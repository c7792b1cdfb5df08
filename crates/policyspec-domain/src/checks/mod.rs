use crate::adapter::PolicyAdapter;
use crate::policy::MatcherConfig;
use policyspec_types::Outcome;

mod action;
mod action_set;
mod mass_assignment;
mod utils;


pub use action::ActionCheck;
pub use action_set::ActionSetCheck;
pub use mass_assignment::AttributeSetCheck;

/// An assertion that can be evaluated against any policy.
pub trait Check {
    /// Consult `policy` and record which requested items disagreed with the expectation.
    ///
    /// Adapter errors are returned as-is.
    fn evaluate<A: PolicyAdapter + ?Sized>(
        &self,
        policy: &A,
        cfg: &MatcherConfig,
    ) -> Result<Outcome, A::Error>;

    /// Short human-readable name, e.g. `permit actions [update, delete]`.
    fn description(&self) -> String;
}
