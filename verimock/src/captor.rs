//! The [`captor`](self) module implements the [`ArgumentCaptor`] type.

use crate::matcher::CapturingMatcher;
use crate::{Error, Result};

/// Captures the arguments of matched calls for further assertions.
///
/// Arguments are usually checked by the matchers of a call pattern. In some
/// situations it is easier to assert on an argument after the verification
/// step. The captor provides a matcher that is placed in the call pattern
/// using [`capture`](Self::capture), and records every argument it is
/// checked against.
///
/// ```
/// use verimock::{args, matchers, ArgumentCaptor, Invocation, InvocationMatcher, Method, MockId};
///
/// trait Service {}
///
/// let mock = MockId::next();
/// let method = Method::new::<dyn Service>("exec").param::<usize>();
///
/// let captor = ArgumentCaptor::<usize>::new();
/// let pattern = InvocationMatcher::new(
///     Invocation::new(mock.clone(), method.clone(), args![]),
///     matchers![captor.capture()],
/// );
///
/// assert!(pattern.matches(&Invocation::new(mock, method, args![4usize])));
/// assert_eq!(4, captor.value().unwrap());
/// ```
///
/// The captor records the argument every time its matcher is evaluated. This
/// includes evaluations done for diagnostic purposes, so captured values should
/// only be read after the verification step selected the intended calls.
#[must_use]
#[derive(Debug)]
pub struct ArgumentCaptor<T> {
    matcher: CapturingMatcher<T>,
}

impl<T> ArgumentCaptor<T> {
    /// Create a new captor that did not capture anything yet.
    pub fn new() -> Self {
        Self {
            matcher: CapturingMatcher::new(),
        }
    }

    /// Get the matcher that captures the argument.
    ///
    /// The returned matcher must be placed at the position of the argument to
    /// capture in the call pattern. It is only a stand-in for the value that
    /// will be passed by a later call, use [`value`](Self::value) or
    /// [`all_values`](Self::all_values) to read the captured arguments.
    ///
    /// The matcher accepts every argument. An argument whose type is not `T`
    /// is accepted without being captured, so a call may count as matched
    /// while the captor does not hold its argument.
    pub fn capture(&self) -> CapturingMatcher<T> {
        self.matcher.clone()
    }

    /// Get the most recently captured argument.
    ///
    /// # Errors
    /// Returns [`Error::NothingCaptured`] if no argument was captured yet.
    pub fn value(&self) -> Result<T>
    where
        T: Clone,
    {
        self.matcher.last_value().ok_or(Error::NothingCaptured)
    }

    /// Get all captured arguments in the order they were captured.
    #[must_use]
    pub fn all_values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.matcher.all_values()
    }

    /// Number of captured arguments.
    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.matcher.len()
    }
}

impl<T> Default for ArgumentCaptor<T> {
    fn default() -> Self {
        Self::new()
    }
}
