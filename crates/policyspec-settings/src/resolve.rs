use crate::model::{PolicyspecConfigV1, SCHEMA_CONFIG_V1};
use anyhow::Context;
use policyspec_domain::MatcherConfig;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub display_alias: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: MatcherConfig,
}

pub fn resolve_config(
    cfg: PolicyspecConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unknown config schema: {schema} (expected '{SCHEMA_CONFIG_V1}')");
    }

    let mut effective = MatcherConfig::default();

    if let Some(alias) = overrides.display_alias.or(cfg.display_alias) {
        validate_alias(&alias).with_context(|| format!("invalid display_alias '{alias}'"))?;
        effective.display_alias = alias;
    }

    Ok(ResolvedConfig { effective })
}

fn validate_alias(alias: &str) -> anyhow::Result<()> {
    let mut chars = alias.chars();
    let Some(first) = chars.next() else {
        anyhow::bail!("alias must not be empty");
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        anyhow::bail!("alias must start with a letter or underscore");
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        anyhow::bail!("alias contains invalid character {bad:?}");
    }
    Ok(())
}
