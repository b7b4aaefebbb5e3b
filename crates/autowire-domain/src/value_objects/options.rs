use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONSTRUCTOR_MEMBER;

/// What to do when the requested member does not exist on the target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMethodPolicy {
    /// Fail with a reflection error
    #[default]
    Fail,
    /// Resolve to an empty argument list and construct without arguments
    TreatAsNoParameters,
}

/// Order in which configured and call-scoped registries are searched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryPrecedence {
    /// Configured registries in registration order, then extras in call order
    #[default]
    BaseFirst,
    /// Extras in call order, then configured registries in registration order
    ExtrasFirst,
}

/// Resolution policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Member used when a caller does not name one
    pub constructor_member: String,
    /// Behavior of dependency resolution for missing members
    pub on_missing_method: MissingMethodPolicy,
    /// Behavior of instantiation for missing members
    ///
    /// Defaults to zero-argument construction through the type's fallback.
    pub on_missing_constructor: MissingMethodPolicy,
    /// Search order between configured and extra registries
    pub registry_precedence: RegistryPrecedence,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            constructor_member: DEFAULT_CONSTRUCTOR_MEMBER.to_string(),
            on_missing_method: MissingMethodPolicy::default(),
            on_missing_constructor: MissingMethodPolicy::TreatAsNoParameters,
            registry_precedence: RegistryPrecedence::default(),
        }
    }
}
