use crate::error::Result;
use crate::value_objects::{ParameterDescriptor, Target};

/// Describes the parameters of a target's member
pub trait TypeReflector: Send + Sync {
    /// Ordered parameter descriptors of `member` on `target`
    ///
    /// Fails with [`Error::Reflection`](crate::Error::Reflection) when the
    /// target or member does not exist, or when a parameter type is not a
    /// single named type. `member` is ignored for callable targets.
    fn describe_parameters(&self, target: &Target, member: &str) -> Result<Vec<ParameterDescriptor>>;

    /// Whether `member` exists on `target`
    ///
    /// Fails only when the target itself cannot be found. Callables have
    /// every member.
    fn has_member(&self, target: &Target, member: &str) -> Result<bool>;
}
