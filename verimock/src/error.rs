//! Error types of the [`verimock`](crate) crate.

use thiserror::Error;

/// Misuse that is detected by this crate.
///
/// A call that simply does not match a pattern is never an error, it is
/// reported as `false` by the `matches*` methods of
/// [`InvocationMatcher`](crate::InvocationMatcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An [`InvocationMatcher`](crate::InvocationMatcher) was constructed
    /// without a list of argument matchers.
    #[error("matchers cannot be null")]
    MissingMatchers,

    /// A captured value was requested from an
    /// [`ArgumentCaptor`](crate::ArgumentCaptor) that did not capture anything yet.
    #[error("no argument value was captured")]
    NothingCaptured,
}

/// Result type used by the [`verimock`](crate) crate.
pub type Result<T> = std::result::Result<T, Error>;
