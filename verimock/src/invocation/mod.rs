//! The [`invocation`](self) module contains the record of a single call to a
//! mocked object and the [`InvocationMatcher`] that compares such records
//! against an expected call pattern.

mod matcher;
mod method;

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::mem::take;
use std::sync::Arc;

pub use matcher::InvocationMatcher;
pub use method::{DeclaringType, Method};

use crate::misc::{next_mock_id, next_sequence_number};
use crate::{Argument, ArgumentMatcher};

/// Identity of a mocked object that receives calls.
///
/// Two ids are equal if they were created by the same call to [`MockId::next`]
/// (or [`MockId::named`]), clones share the identity of their origin. The
/// name is only used to make messages more readable.
#[must_use]
#[derive(Debug, Clone)]
pub struct MockId {
    id: usize,
    name: Option<Arc<str>>,
}

impl MockId {
    /// Create a new unique mock id.
    pub fn next() -> Self {
        Self {
            id: next_mock_id(),
            name: None,
        }
    }

    /// Create a new unique mock id with the passed `name`.
    pub fn named<N: Into<Arc<str>>>(name: N) -> Self {
        Self {
            id: next_mock_id(),
            name: Some(name.into()),
        }
    }

    /// Numeric value of the id.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Name of the mock, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl PartialEq for MockId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MockId {}

impl Hash for MockId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for MockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.name {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "mock#{}", self.id),
        }
    }
}

/// Immutable record of a single call to a mocked object.
#[derive(Debug, Clone)]
pub struct Invocation {
    mock: MockId,
    method: Method,
    arguments: Vec<Arc<dyn Argument>>,
    sequence_number: usize,
}

impl Invocation {
    /// Record a new invocation of `method` on `mock` with the passed
    /// `arguments`.
    ///
    /// The invocation gets the next process wide sequence number assigned.
    #[must_use]
    pub fn new<I>(mock: MockId, method: Method, arguments: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Argument>>,
    {
        Self::with_sequence_number(mock, method, arguments, next_sequence_number())
    }

    /// Like [`new`](Self::new) but uses the passed `sequence_number` instead of
    /// the process wide one.
    #[must_use]
    pub fn with_sequence_number<I>(
        mock: MockId,
        method: Method,
        arguments: I,
        sequence_number: usize,
    ) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Argument>>,
    {
        Self {
            mock,
            method,
            arguments: arguments.into_iter().collect(),
            sequence_number,
        }
    }

    /// Mocked object the call was made on.
    #[must_use]
    pub fn mock(&self) -> &MockId {
        &self.mock
    }

    /// Method that was called.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Arguments that were passed to the call.
    #[must_use]
    pub fn arguments(&self) -> &[Arc<dyn Argument>] {
        &self.arguments
    }

    /// Sequence number that was assigned when the call was recorded.
    #[must_use]
    pub fn sequence_number(&self) -> usize {
        self.sequence_number
    }

    /// Format the invocation using the passed `matchers` instead of the actual
    /// arguments. If `matchers` is empty the actual arguments are used.
    #[must_use]
    pub fn to_string_with_matchers(&self, matchers: &[Box<dyn ArgumentMatcher>]) -> String {
        if matchers.is_empty() {
            self.to_string()
        } else {
            let args = Joined(matchers.iter().map(|m| m as &dyn Display));

            format!("{}.{}({args});", self.mock, self.method)
        }
    }

    /// Same as [`to_string_with_matchers`](Self::to_string_with_matchers) but
    /// appends the sequence number of the invocation.
    #[must_use]
    pub fn to_string_with_sequence_number(&self, matchers: &[Box<dyn ArgumentMatcher>]) -> String {
        format!(
            "{} #{}",
            self.to_string_with_matchers(matchers),
            self.sequence_number
        )
    }

    /// Format the invocation using the parameter types of the method instead of
    /// the arguments.
    #[must_use]
    pub fn to_string_with_argument_types(&self) -> String {
        let types = self.method.parameter_types().iter();
        let types = Joined(types.map(|t| t as &dyn Display));

        format!("{}.{}({types});", self.mock, self.method)
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        write!(f, "{}.{}(", self.mock, self.method)?;

        for arg in &self.arguments {
            if !take(&mut first) {
                write!(f, ", ")?;
            }

            write!(f, "{arg:?}")?;
        }

        write!(f, ");")
    }
}

/// Helper to write a comma separated list of displayable items.
struct Joined<I>(I);

impl<'a, I> Display for Joined<I>
where
    I: Iterator<Item = &'a dyn Display> + Clone,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        for item in self.0.clone() {
            if !take(&mut first) {
                write!(f, ", ")?;
            }

            item.fmt(f)?;
        }

        Ok(())
    }
}
