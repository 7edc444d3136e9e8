//! The [`argument`](self) module defines the type erased representation of a
//! single argument that was passed to a mocked method.

use std::any::{type_name, Any};
use std::fmt::Debug;

/// Type erased argument value of a recorded [`Invocation`](crate::Invocation).
///
/// This is implemented for any `'static` type that implements [`Debug`].
/// Matchers downcast the argument to the type they expect, so equality is only
/// required by matchers that compare values, like [`Equals`](crate::matcher::Equals).
pub trait Argument: Debug {
    /// Get the argument as [`Any`] to downcast it to its concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Get the name of the concrete type of the argument.
    fn type_name(&self) -> &'static str;
}

impl<T> Argument for T
where
    T: Any + Debug,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

impl<'a> dyn Argument + 'a {
    /// Try to downcast the argument to the concrete type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
