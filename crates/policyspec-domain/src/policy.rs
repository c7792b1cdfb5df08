/// Adapter lookup used to name the actor when no alias is configured.
pub const DEFAULT_DISPLAY_ALIAS: &str = "user";

/// Settings that shape how outcomes are captured for display.
///
/// Passed into every evaluation rather than held globally, so two suites with
/// different aliases never observe each other's configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Name handed to [`PolicyAdapter::identify`](crate::PolicyAdapter::identify).
    pub display_alias: String,
}

impl MatcherConfig {
    pub fn with_display_alias(alias: impl Into<String>) -> Self {
        Self {
            display_alias: alias.into(),
        }
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::with_display_alias(DEFAULT_DISPLAY_ALIAS)
    }
}
