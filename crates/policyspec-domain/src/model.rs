/// Ordered action names named by one assertion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionSet(Vec<String>);

impl ActionSet {
    pub fn new<I, S>(actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(actions.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: Into<String>> FromIterator<S> for ActionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<S: Into<String>> From<Vec<S>> for ActionSet {
    fn from(actions: Vec<S>) -> Self {
        Self::new(actions)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ActionSet {
    fn from(actions: [S; N]) -> Self {
        Self::new(actions)
    }
}

/// Ordered attribute names named by one mass-assignment assertion.
///
/// A single name converts into a one-element set, so `"title"` and `["title"]`
/// build the same value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeSet(Vec<String>);

impl AttributeSet {
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(attributes.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for AttributeSet {
    fn from(attribute: &str) -> Self {
        Self(vec![attribute.to_string()])
    }
}

impl From<String> for AttributeSet {
    fn from(attribute: String) -> Self {
        Self(vec![attribute])
    }
}

impl<S: Into<String>> From<Vec<S>> for AttributeSet {
    fn from(attributes: Vec<S>) -> Self {
        Self::new(attributes)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for AttributeSet {
    fn from(attributes: [S; N]) -> Self {
        Self::new(attributes)
    }
}

impl<S: Into<String> + Clone> From<&[S]> for AttributeSet {
    fn from(attributes: &[S]) -> Self {
        Self::new(attributes.iter().cloned())
    }
}

impl<S: Into<String>> FromIterator<S> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Action whose permitted-attribute list a mass-assignment assertion consults.
///
/// Only presence matters: an empty name is still a scope, distinct from none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionScope(String);

impl ActionScope {
    pub fn new(action: impl Into<String>) -> Self {
        Self(action.into())
    }

    pub fn action(&self) -> &str {
        &self.0
    }
}
