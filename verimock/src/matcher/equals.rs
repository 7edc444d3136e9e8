use std::any::Any;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use crate::{Argument, ArgumentMatcher};

/// Create a new [`Equals`] matcher for the passed `value`.
pub fn equal<T>(value: T) -> Equals<T>
where
    T: Any + Debug + PartialEq,
{
    Equals(value)
}

/// Implements an [`ArgumentMatcher`] that accepts arguments of type `T` that
/// are equal to the expected value.
///
/// Arguments of any other type never match.
#[must_use]
#[derive(Debug, Clone)]
pub struct Equals<T>(pub T);

impl<T> ArgumentMatcher for Equals<T>
where
    T: Any + Debug + PartialEq,
{
    fn matches(&self, argument: &dyn Argument) -> bool {
        argument
            .downcast_ref::<T>()
            .is_some_and(|value| *value == self.0)
    }
}

impl<T> Display for Equals<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?}", self.0)
    }
}
