use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use tracing::trace;

use crate::{Argument, ArgumentMatcher, Error, Result};

use super::{Invocation, Method};

/// Expected call pattern that is compared against recorded [`Invocation`]s.
///
/// The pattern consists of an invocation, that provides the expected mock and
/// method, and an ordered list of [`ArgumentMatcher`]s, one for each parameter
/// of the method.
///
/// Evaluating a pattern may have side effects: a
/// [`CapturingMatcher`](crate::CapturingMatcher) records every argument it is
/// checked against, also if the check is only made by one of the diagnostic
/// methods ([`matches_but_mocks_are_different`](Self::matches_but_mocks_are_different)
/// or [`matches_but_not_method_declared_class`](Self::matches_but_not_method_declared_class)).
/// Captured values should therefore only be read after the verification step
/// selected the invocations of interest.
pub struct InvocationMatcher {
    invocation: Invocation,
    matchers: Vec<Box<dyn ArgumentMatcher>>,
}

impl InvocationMatcher {
    /// Create a new pattern from the passed `invocation` and `matchers`.
    #[must_use]
    pub fn new(invocation: Invocation, matchers: Vec<Box<dyn ArgumentMatcher>>) -> Self {
        Self {
            invocation,
            matchers,
        }
    }

    /// Create a new pattern from the passed `invocation` and optional
    /// `matchers`.
    ///
    /// # Errors
    /// Returns [`Error::MissingMatchers`] if `matchers` is `None`.
    pub fn try_new(
        invocation: Invocation,
        matchers: Option<Vec<Box<dyn ArgumentMatcher>>>,
    ) -> Result<Self> {
        let matchers = matchers.ok_or(Error::MissingMatchers)?;

        Ok(Self::new(invocation, matchers))
    }

    /// Create a new pattern without any argument matchers.
    ///
    /// Such a pattern only matches invocations without arguments.
    #[must_use]
    pub fn from_invocation(invocation: Invocation) -> Self {
        Self::new(invocation, Vec::new())
    }

    /// Method that is expected by this pattern.
    #[must_use]
    pub fn method(&self) -> &Method {
        self.invocation.method()
    }

    /// Invocation that provides the expected mock and method.
    #[must_use]
    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// Argument matchers of this pattern.
    #[must_use]
    pub fn matchers(&self) -> &[Box<dyn ArgumentMatcher>] {
        &self.matchers
    }

    /// Returns `true` if `actual` was made on the expected mock, to the
    /// expected method and with matching arguments, `false` otherwise.
    #[must_use]
    pub fn matches(&self, actual: &Invocation) -> bool {
        self.invocation.mock() == actual.mock()
            && self.invocation.method() == actual.method()
            && self.arguments_match(actual.arguments())
    }

    /// Returns `true` if `actual` would match, except that it was made on a
    /// different mock, `false` otherwise.
    #[must_use]
    pub fn matches_but_mocks_are_different(&self, actual: &Invocation) -> bool {
        self.invocation.mock() != actual.mock()
            && self.invocation.method() == actual.method()
            && self.arguments_match(actual.arguments())
    }

    /// Returns `true` if `actual` was made on the expected mock with matching
    /// arguments to a method with the expected name, but the method is declared
    /// by a different type, `false` otherwise.
    #[must_use]
    pub fn matches_but_not_method_declared_class(&self, actual: &Invocation) -> bool {
        let expected = self.invocation.method();
        let method = actual.method();

        self.invocation.mock() == actual.mock()
            && self.arguments_match(actual.arguments())
            && expected.name() == method.name()
            && expected.declaring_type() != method.declaring_type()
    }

    /// Format the pattern with the sequence number of its invocation.
    #[must_use]
    pub fn to_string_with_sequence_number(&self) -> String {
        self.invocation
            .to_string_with_sequence_number(&self.matchers)
    }

    /// Format the pattern with the parameter types of its method.
    #[must_use]
    pub fn to_string_with_argument_types(&self) -> String {
        self.invocation.to_string_with_argument_types()
    }

    pub(crate) fn arguments_match(&self, arguments: &[Arc<dyn Argument>]) -> bool {
        if arguments.len() != self.matchers.len() {
            trace!(
                expected = self.matchers.len(),
                actual = arguments.len(),
                "Argument count mismatch"
            );

            return false;
        }

        for (index, (matcher, arg)) in self.matchers.iter().zip(arguments).enumerate() {
            if !matcher.matches(&**arg) {
                trace!(index, matcher = %matcher, argument = ?arg, "Argument mismatch");

                return false;
            }
        }

        true
    }
}

impl Display for InvocationMatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.invocation.to_string_with_matchers(&self.matchers))
    }
}

impl std::fmt::Debug for InvocationMatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("InvocationMatcher")
            .field("invocation", &self.invocation)
            .field("matchers", &self.to_string())
            .finish()
    }
}
