use std::any::{type_name, Any};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{trace, warn};

use crate::{Argument, ArgumentMatcher, Matcher};

/// Matcher that accepts every argument and records it.
///
/// Clones of a [`CapturingMatcher`] share the same history, so the matcher
/// that was moved into an [`InvocationMatcher`](crate::InvocationMatcher)
/// records into the history of the [`ArgumentCaptor`](crate::ArgumentCaptor)
/// that created it.
///
/// Every evaluation records the argument, including evaluations that are
/// made for diagnostic purposes only.
#[must_use]
#[derive(Debug)]
pub struct CapturingMatcher<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T> CapturingMatcher<T> {
    /// Create a new [`CapturingMatcher`] with an empty history.
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the most recently recorded value.
    #[must_use]
    pub fn last_value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.values.lock().last().cloned()
    }

    /// Get all recorded values in the order they were recorded.
    #[must_use]
    pub fn all_values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.lock().clone()
    }

    /// Number of recorded values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    /// Returns `true` if no value was recorded yet, `false` otherwise.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }

    fn record(&self, value: T)
    where
        T: std::fmt::Debug,
    {
        trace!(?value, "Capture argument");

        self.values.lock().push(value);
    }
}

impl<T> Default for CapturingMatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CapturingMatcher<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T> ArgumentMatcher for CapturingMatcher<T>
where
    T: Any + Clone + std::fmt::Debug,
{
    fn matches(&self, argument: &dyn Argument) -> bool {
        match argument.downcast_ref::<T>() {
            Some(value) => self.record(value.clone()),
            None => warn!(
                expected = type_name::<T>(),
                actual = argument.type_name(),
                "Unable to capture argument of unexpected type"
            ),
        }

        true
    }
}

impl<T> Matcher<T> for CapturingMatcher<T>
where
    T: Clone + std::fmt::Debug,
{
    fn matches(&self, value: &T) -> bool {
        self.record(value.clone());

        true
    }
}

impl<T> Display for CapturingMatcher<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<Capturing argument>")
    }
}
