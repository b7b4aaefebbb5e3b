use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value_objects::Instance;

/// One resolved constructor argument
#[derive(Clone)]
pub enum ResolvedArgument {
    /// An instance found in a registry
    Value(Instance),
    /// Null, either from a null registry entry or the nullable fallback
    Null,
    /// Left to the parameter's declared default
    Omitted,
}

impl ResolvedArgument {
    /// Returns true when the argument was left to its default
    pub fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted)
    }

    /// Returns true for a null argument
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The held instance, if any
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Value(instance) => Some(instance),
            _ => None,
        }
    }
}

impl fmt::Debug for ResolvedArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.write_str("Value(..)"),
            Self::Null => f.write_str("Null"),
            Self::Omitted => f.write_str("Omitted"),
        }
    }
}

/// Positional argument list produced by the resolver
///
/// Always the same length as the descriptor list it was resolved from;
/// defaulted parameters keep an [`ResolvedArgument::Omitted`] slot.
#[derive(Debug, Clone, Default)]
pub struct ResolvedArguments {
    arguments: Vec<ResolvedArgument>,
}

impl ResolvedArguments {
    /// Empty argument list
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of argument slots
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns true when there are no slots
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Argument at `position`
    pub fn get(&self, position: usize) -> Option<&ResolvedArgument> {
        self.arguments.get(position)
    }

    /// Iterate over all slots in order
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedArgument> {
        self.arguments.iter()
    }

    /// Returns true if `position` was omitted or lies past the end
    pub fn is_omitted(&self, position: usize) -> bool {
        self.get(position).is_none_or(ResolvedArgument::is_omitted)
    }

    /// Instance at `position`, downcast to `T`
    ///
    /// Fails when the slot is null, omitted, missing, or holds another type.
    pub fn required<T: Any + Send + Sync>(&self, position: usize) -> Result<Arc<T>> {
        match self.get(position) {
            Some(ResolvedArgument::Value(instance)) => downcast(instance, position),
            Some(other) => Err(Error::invalid_argument(format!(
                "Argument {position} is {other:?}, expected {}",
                type_name::<T>()
            ))),
            None => Err(Error::invalid_argument(format!(
                "Argument {position} is missing, expected {}",
                type_name::<T>()
            ))),
        }
    }

    /// Instance at `position` downcast to `T`, or `None` when null or omitted
    pub fn nullable<T: Any + Send + Sync>(&self, position: usize) -> Result<Option<Arc<T>>> {
        match self.get(position) {
            Some(ResolvedArgument::Value(instance)) => downcast(instance, position).map(Some),
            _ => Ok(None),
        }
    }
}

fn downcast<T: Any + Send + Sync>(instance: &Instance, position: usize) -> Result<Arc<T>> {
    Arc::clone(instance).downcast::<T>().map_err(|_| {
        Error::invalid_argument(format!(
            "Argument {position} is not of type {}",
            type_name::<T>()
        ))
    })
}

impl From<Vec<ResolvedArgument>> for ResolvedArguments {
    fn from(arguments: Vec<ResolvedArgument>) -> Self {
        Self { arguments }
    }
}

impl FromIterator<ResolvedArgument> for ResolvedArguments {
    fn from_iter<I: IntoIterator<Item = ResolvedArgument>>(iter: I) -> Self {
        Self {
            arguments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResolvedArguments {
    type Item = &'a ResolvedArgument;
    type IntoIter = std::slice::Iter<'a, ResolvedArgument>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
