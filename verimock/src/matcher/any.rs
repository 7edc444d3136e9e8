use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{Argument, ArgumentMatcher};

use super::Matcher;

/// Create a new [`Any`] matcher, that accepts every value.
pub fn any() -> Any {
    Any
}

/// Implements a [`Matcher`] that accepts every value of any type.
///
/// [`Any`] may also be used directly as [`ArgumentMatcher`].
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Any;

impl<T> Matcher<T> for Any {
    fn matches(&self, _value: &T) -> bool {
        true
    }
}

impl ArgumentMatcher for Any {
    fn matches(&self, _argument: &dyn Argument) -> bool {
        true
    }
}

impl Display for Any {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "any")
    }
}
