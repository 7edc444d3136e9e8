//! The [`matcher`](self) module contains the matcher traits and different
//! pre-defined matchers that may be used as argument matchers in an
//! [`InvocationMatcher`](crate::InvocationMatcher).

mod any;
mod capturing;
mod compare;
mod equals;

use std::any::{type_name, Any as StdAny};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use crate::Argument;

pub use any::{any, Any};
pub use capturing::CapturingMatcher;
pub use compare::{eq, ge, gt, le, lt, ne, Eq, Ge, Gt, Le, Lt, Ne};
pub use equals::{equal, Equals};

/// A matcher is used to check if the passed argument of type `T` matches a
/// pre-defined expectation.
///
/// The [`Display`] implementation is used to describe the matcher in messages.
pub trait Matcher<T>: Display {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &T) -> bool;
}

/// Type erased matcher for a single argument position of an
/// [`InvocationMatcher`](crate::InvocationMatcher).
///
/// Implementations must not have side effects, except for
/// [`CapturingMatcher`] which records every argument it is checked against.
pub trait ArgumentMatcher: Display {
    /// Returns `true` if the passed `argument` matches the expectations,
    /// `false` otherwise.
    fn matches(&self, argument: &dyn Argument) -> bool;
}

/// Create a new [`Typed`] argument matcher, that forwards arguments of type
/// `T` to the passed typed `matcher`.
pub fn arg<T, M>(matcher: M) -> Typed<T, M>
where
    T: StdAny,
    M: Matcher<T>,
{
    Typed {
        matcher,
        _marker: PhantomData,
    }
}

/// Implements [`ArgumentMatcher`] for a typed [`Matcher`] `M`.
///
/// Arguments that are not of type `T` never match.
#[must_use]
pub struct Typed<T, M> {
    matcher: M,
    _marker: PhantomData<fn(&T)>,
}

impl<T, M> ArgumentMatcher for Typed<T, M>
where
    T: StdAny,
    M: Matcher<T>,
{
    fn matches(&self, argument: &dyn Argument) -> bool {
        argument
            .downcast_ref::<T>()
            .is_some_and(|value| self.matcher.matches(value))
    }
}

impl<T, M> Display for Typed<T, M>
where
    M: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.matcher.fmt(f)
    }
}

impl<T, M> std::fmt::Debug for Typed<T, M>
where
    M: std::fmt::Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Typed")
            .field("type", &type_name::<T>())
            .field("matcher", &self.matcher)
            .finish()
    }
}
