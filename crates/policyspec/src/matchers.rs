use policyspec_domain::{ActionCheck, ActionSet, ActionSetCheck, AttributeSet, AttributeSetCheck};
use policyspec_types::Polarity;

pub fn permit_action(action: impl Into<String>) -> ActionCheck {
    ActionCheck::new(action, Polarity::Permit)
}

pub fn forbid_action(action: impl Into<String>) -> ActionCheck {
    ActionCheck::new(action, Polarity::Forbid)
}

pub fn permit_actions(actions: impl Into<ActionSet>) -> ActionSetCheck {
    ActionSetCheck::new(actions, Polarity::Permit)
}

pub fn forbid_actions(actions: impl Into<ActionSet>) -> ActionSetCheck {
    ActionSetCheck::new(actions, Polarity::Forbid)
}

/// Accepts a single attribute or a sequence; chain `.for_action(..)` to scope it.
pub fn permit_mass_assignment_of(attributes: impl Into<AttributeSet>) -> AttributeSetCheck {
    AttributeSetCheck::new(attributes, Polarity::Permit)
}

pub fn forbid_mass_assignment_of(attributes: impl Into<AttributeSet>) -> AttributeSetCheck {
    AttributeSetCheck::new(attributes, Polarity::Forbid)
}
