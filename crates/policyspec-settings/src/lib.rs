//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{PolicyspecConfigV1, SCHEMA_CONFIG_V1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `policyspec.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PolicyspecConfigV1> {
    let cfg: PolicyspecConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective matcher config (defaults + file + overrides).
pub fn resolve_config(
    cfg: PolicyspecConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema for `policyspec.toml`, for editor tooling.
pub fn config_json_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(PolicyspecConfigV1))
        .unwrap_or(serde_json::Value::Null)
}
