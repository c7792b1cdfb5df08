use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Schema string accepted in the optional `schema` key.
pub const SCHEMA_CONFIG_V1: &str = "policyspec.config.v1";

/// `policyspec.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PolicyspecConfigV1 {
    /// Optional schema string for tooling (`policyspec.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Policy lookup that names the actor in failure messages (default `user`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_alias: Option<String>,
}
